//! Scheduling engines and summary metrics.
//!
//! Provides the four classical single-CPU policies and the metrics
//! aggregator that consumes their output.
//!
//! # Algorithms
//!
//! | Engine | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | `FcfsScheduler` | no | earliest arrival |
//! | `SjfScheduler` | no | shortest burst among arrived |
//! | `PriorityScheduler` | no | lowest priority value among arrived |
//! | `RoundRobinScheduler` | yes | FIFO with fixed quantum |
//!
//! Every engine validates its workload on entry and verifies the finished
//! schedule against the timing invariants before returning it.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod fcfs;
mod kpi;
mod non_preemptive;
mod round_robin;
mod verify;

pub use fcfs::FcfsScheduler;
pub use kpi::SummaryMetrics;
pub use non_preemptive::{NonPreemptiveScheduler, PriorityScheduler, SjfScheduler};
pub use round_robin::RoundRobinScheduler;
pub use verify::verify_schedule;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SimResult, SimulationError};
use crate::models::{Process, Schedule};
use crate::validation::ensure_valid_workload;

/// A single-CPU scheduling policy.
///
/// Implementors provide [`dispatch`](Scheduler::dispatch); callers use
/// [`schedule`](Scheduler::schedule), which wraps it with input validation
/// and output verification.
pub trait Scheduler: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Whether a process may be interrupted before its burst completes.
    fn is_preemptive(&self) -> bool {
        false
    }

    /// Runs the policy over an already validated workload.
    fn dispatch(&self, processes: &[Process]) -> SimResult<Schedule>;

    /// Validates `processes`, runs the policy and verifies the result.
    fn schedule(&self, processes: &[Process]) -> SimResult<Schedule> {
        ensure_valid_workload(processes)?;
        debug!(
            policy = self.name(),
            processes = processes.len(),
            "simulation started"
        );

        let schedule = self.dispatch(processes)?;
        verify_schedule(processes, &schedule, self.is_preemptive())?;

        debug!(
            policy = self.name(),
            makespan = schedule.makespan(),
            slices = schedule.timeline.len(),
            "simulation finished"
        );
        Ok(schedule)
    }
}

/// Advances the clock by `by` units on behalf of `pid`.
///
/// Validated workloads never overflow; an overflow here is an engine fault.
pub(crate) fn advance(now: i64, by: i64, pid: &str) -> SimResult<i64> {
    now.checked_add(by)
        .ok_or_else(|| SimulationError::internal(pid, format!("clock overflow at {now} + {by}")))
}

/// Runtime selection of a scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Serve.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Priority scheduling (non-preemptive).
    Priority,
    /// Round-Robin with a fixed quantum.
    RoundRobin {
        /// Maximum CPU time per dispatch; must be at least 1.
        quantum: i64,
    },
}

impl Algorithm {
    /// Display name of the policy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Priority => "PRIORITY",
            Self::RoundRobin { .. } => "RR",
        }
    }

    /// Runs the selected policy.
    ///
    /// The Round-Robin quantum is checked before the workload.
    pub fn run(&self, processes: &[Process]) -> SimResult<Schedule> {
        match *self {
            Self::Fcfs => FcfsScheduler.schedule(processes),
            Self::Sjf => SjfScheduler::default().schedule(processes),
            Self::Priority => PriorityScheduler::default().schedule(processes),
            Self::RoundRobin { quantum } => {
                RoundRobinScheduler::new(quantum)?.schedule(processes)
            }
        }
    }
}

/// Simulates `algorithm` over `processes`.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::{simulate, Algorithm, SummaryMetrics};
///
/// let processes = vec![
///     Process::new("P1", 0, 5),
///     Process::new("P2", 1, 3),
/// ];
/// let schedule = simulate(&Algorithm::RoundRobin { quantum: 2 }, &processes).unwrap();
/// assert_eq!(schedule.result_for("P1").unwrap().completion_time, 8);
/// assert_eq!(schedule.result_for("P2").unwrap().completion_time, 7);
///
/// let metrics = SummaryMetrics::calculate(&schedule);
/// assert_eq!(metrics.average_waiting_time, 3.0);
/// ```
pub fn simulate(algorithm: &Algorithm, processes: &[Process]) -> SimResult<Schedule> {
    algorithm.run(processes)
}
