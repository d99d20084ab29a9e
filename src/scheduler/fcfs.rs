//! First-Come-First-Serve scheduling.
//!
//! # Algorithm
//!
//! 1. Sort processes by arrival time (stable).
//! 2. Run each to completion in that order, idling the CPU until the
//!    next arrival when it would otherwise start early.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) thereafter.

use tracing::trace;

use super::{advance, Scheduler};
use crate::dispatching::arrival_order;
use crate::error::SimResult;
use crate::models::{Process, Schedule, ScheduleResult};

/// Non-preemptive FCFS scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::{FcfsScheduler, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let schedule = FcfsScheduler.schedule(&processes).unwrap();
/// assert_eq!(schedule.result_for("P2").unwrap().start_time, 5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn dispatch(&self, processes: &[Process]) -> SimResult<Schedule> {
        let mut schedule = Schedule::new();
        let mut current_time = 0;

        for idx in arrival_order(processes) {
            let process = &processes[idx];
            if current_time < process.arrival_time {
                trace!(from = current_time, to = process.arrival_time, "cpu idle");
                current_time = process.arrival_time;
            }

            let start = current_time;
            let completion = advance(start, process.burst_time, &process.pid)?;
            trace!(pid = %process.pid, start, completion, "dispatch");

            schedule.add_result(ScheduleResult::new(process, start, completion));
            current_time = completion;
        }

        Ok(schedule)
    }
}
