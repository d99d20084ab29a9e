//! Process (workload entry) model.
//!
//! A process is the unit of work handed to a scheduling engine. Records are
//! created once per simulation run and never mutated by the engines.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled on a single CPU.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: String,
    /// Time unit at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower value = higher priority).
    pub priority: i32,
}

impl Process {
    /// Creates a new process with priority 0.
    pub fn new(pid: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived at `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.pid, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_default_priority() {
        assert_eq!(Process::new("P1", 0, 1).priority, 0);
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new("P1", 4, 1);
        assert!(!p.has_arrived(3));
        assert!(p.has_arrived(4));
        assert!(p.has_arrived(10));
    }
}
