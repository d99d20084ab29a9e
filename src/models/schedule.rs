//! Schedule (simulation output) model.
//!
//! A schedule holds one result row per process and, for preemptive
//! policies, the full execution timeline the rows were derived from.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::Process;

/// The outcome of a completed simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Per-process results.
    ///
    /// Dispatch order for non-preemptive engines, arrival order for Round-Robin.
    pub results: Vec<ScheduleResult>,
    /// Execution slices ordered by start time. Populated by Round-Robin only.
    pub timeline: Vec<ExecutionSlice>,
}

/// Timing result for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Process identifier.
    pub pid: String,
    /// Arrival time of the process.
    pub arrival_time: i64,
    /// Total CPU time of the process.
    pub burst_time: i64,
    /// Priority of the process.
    pub priority: i32,
    /// Time of first dispatch.
    pub start_time: i64,
    /// End of the final dispatch.
    pub completion_time: i64,
    /// `completion - arrival - burst`.
    pub waiting_time: i64,
    /// `completion - arrival`.
    pub turnaround_time: i64,
}

/// One contiguous interval during which a single process occupies the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process occupying the CPU.
    pub pid: String,
    /// Slice start (inclusive).
    pub start: i64,
    /// Slice end (exclusive).
    pub end: i64,
}

impl ScheduleResult {
    /// Builds a result row from a process and its first/last CPU occupancy.
    ///
    /// Waiting and turnaround time are derived, never supplied. Derivations
    /// saturate at the `i64` bounds instead of wrapping.
    pub fn new(process: &Process, start_time: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time.saturating_sub(process.arrival_time);
        Self {
            pid: process.pid.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            start_time,
            completion_time,
            waiting_time: turnaround_time.saturating_sub(process.burst_time),
            turnaround_time,
        }
    }

    /// Time between arrival and first dispatch.
    #[inline]
    pub fn response_time(&self) -> i64 {
        self.start_time.saturating_sub(self.arrival_time)
    }
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(pid: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            pid: pid.into(),
            start,
            end,
        }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a result row.
    pub fn add_result(&mut self, result: ScheduleResult) {
        self.results.push(result);
    }

    /// Appends an execution slice to the timeline.
    pub fn add_slice(&mut self, slice: ExecutionSlice) {
        self.timeline.push(slice);
    }

    /// Whether the schedule has no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of result rows.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Finds the result for a given process.
    pub fn result_for(&self, pid: &str) -> Option<&ScheduleResult> {
        self.results.iter().find(|r| r.pid == pid)
    }

    /// Returns all timeline slices of a given process, in time order.
    pub fn slices_for(&self, pid: &str) -> Vec<&ExecutionSlice> {
        self.timeline.iter().filter(|s| s.pid == pid).collect()
    }

    /// Sum of burst times over all results.
    pub fn total_burst(&self) -> i64 {
        self.results
            .iter()
            .fold(0, |sum: i64, r| sum.saturating_add(r.burst_time))
    }

    /// Span from earliest arrival to latest completion.
    ///
    /// Returns 0 for an empty schedule.
    pub fn makespan(&self) -> i64 {
        let first_arrival = self.results.iter().map(|r| r.arrival_time).min();
        let last_completion = self.results.iter().map(|r| r.completion_time).max();
        match (first_arrival, last_completion) {
            (Some(first), Some(last)) => last.saturating_sub(first),
            _ => 0,
        }
    }

    /// Execution slices suitable for a Gantt chart.
    ///
    /// Returns the recorded timeline when present; otherwise one slice per
    /// result (non-preemptive schedules run each process in one piece).
    pub fn gantt(&self) -> Vec<ExecutionSlice> {
        if !self.timeline.is_empty() {
            return self.timeline.clone();
        }
        let mut slices: Vec<ExecutionSlice> = self
            .results
            .iter()
            .map(|r| ExecutionSlice::new(r.pid.clone(), r.start_time, r.completion_time))
            .collect();
        slices.sort_by_key(|s| s.start);
        slices
    }
}
