//! Dispatching rules and the ready queue for non-preemptive engines.
//!
//! A dispatching rule scores a ready process; the ready queue admits
//! processes lazily as the clock passes their arrival and hands out the
//! lowest-scoring one.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{ReadyQueue, rules};
//! use cpu_sched_sim::models::Process;
//!
//! let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 0, 2)];
//! let mut queue = ReadyQueue::new(&processes, &rules::ShortestBurst);
//! queue.admit(0);
//! assert_eq!(queue.pop(), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod ready_queue;
pub mod rules;

pub use ready_queue::ReadyQueue;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first.
pub type RuleScore = i64;

/// A dispatching rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = higher priority.** Ties are broken by the ready queue:
/// earlier arrival first, then earlier position in the workload.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a process; lower = dispatched earlier.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Indices of `processes` ordered by arrival time.
///
/// The sort is stable: processes arriving together keep workload order.
pub fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| processes[i].arrival_time);
    indices
}
