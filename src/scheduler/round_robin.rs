//! Round-Robin scheduling with a fixed quantum.
//!
//! # Algorithm
//!
//! 1. Admit, in arrival order, every process that has arrived.
//! 2. If the ready queue is empty, idle until the next arrival.
//! 3. Run the head process for `min(quantum, remaining)` and record the slice.
//! 4. Admit arrivals up to the new clock value.
//! 5. Re-enqueue the process at the tail if it still has work.
//!
//! Step 4 runs before step 5, so a process arriving exactly when a slice
//! ends is queued ahead of the process that was just preempted.
//!
//! Per-process results are derived from the recorded timeline afterwards.
//!
//! # Complexity
//! O(total_burst / quantum + n) dispatches.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use super::{advance, Scheduler};
use crate::dispatching::arrival_order;
use crate::error::{SimResult, SimulationError};
use crate::models::{ExecutionSlice, Process, Schedule, ScheduleResult};

/// Preemptive Round-Robin scheduler.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::scheduler::{RoundRobinScheduler, Scheduler};
///
/// let processes = vec![Process::new("P1", 0, 3), Process::new("P2", 0, 1)];
/// let scheduler = RoundRobinScheduler::new(2).unwrap();
/// let schedule = scheduler.schedule(&processes).unwrap();
/// assert_eq!(schedule.timeline.len(), 3);
/// assert_eq!(schedule.result_for("P1").unwrap().completion_time, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum.
    ///
    /// # Errors
    /// [`SimulationError::InvalidQuantum`] if `quantum < 1`.
    pub fn new(quantum: i64) -> SimResult<Self> {
        if quantum < 1 {
            return Err(SimulationError::InvalidQuantum(quantum));
        }
        Ok(Self { quantum })
    }

    /// Maximum CPU time per dispatch.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl Scheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn dispatch(&self, processes: &[Process]) -> SimResult<Schedule> {
        let order = arrival_order(processes);
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
        let mut cursor = 0;
        let mut completed = 0;
        let mut current_time = 0;
        let mut schedule = Schedule::new();

        while completed < processes.len() {
            admit(processes, &order, &mut cursor, current_time, &mut queue);

            let Some(idx) = queue.pop_front() else {
                let Some(&next) = order.get(cursor) else {
                    let stuck = processes
                        .iter()
                        .zip(&remaining)
                        .find(|(_, left)| **left > 0)
                        .map_or("?", |(p, _)| p.pid.as_str());
                    return Err(SimulationError::internal(
                        stuck,
                        "ready queue drained while work remains",
                    ));
                };
                let arrival = processes[next].arrival_time;
                trace!(from = current_time, to = arrival, "cpu idle");
                current_time = arrival;
                continue;
            };

            let process = &processes[idx];
            let exec = self.quantum.min(remaining[idx]);
            let end = advance(current_time, exec, &process.pid)?;
            trace!(pid = %process.pid, start = current_time, end, "slice");
            schedule.add_slice(ExecutionSlice::new(process.pid.clone(), current_time, end));
            current_time = end;
            remaining[idx] -= exec;

            admit(processes, &order, &mut cursor, current_time, &mut queue);

            if remaining[idx] > 0 {
                queue.push_back(idx);
            } else {
                completed += 1;
            }
        }

        let results = results_from_timeline(processes, &order, &schedule.timeline)?;
        schedule.results = results;
        Ok(schedule)
    }
}

/// Moves every process arrived by `now` from the arrival list to the queue tail.
fn admit(
    processes: &[Process],
    order: &[usize],
    cursor: &mut usize,
    now: i64,
    queue: &mut VecDeque<usize>,
) {
    while let Some(&idx) = order.get(*cursor) {
        if !processes[idx].has_arrived(now) {
            break;
        }
        queue.push_back(idx);
        *cursor += 1;
    }
}

/// Builds one result per process, in arrival order, from a slice timeline.
///
/// Start is the first slice's start, completion the last slice's end.
/// A process with no slice is an engine fault, never a zero row.
fn results_from_timeline(
    processes: &[Process],
    order: &[usize],
    timeline: &[ExecutionSlice],
) -> SimResult<Vec<ScheduleResult>> {
    let mut spans: HashMap<&str, (i64, i64)> = HashMap::with_capacity(processes.len());
    for slice in timeline {
        spans
            .entry(slice.pid.as_str())
            .and_modify(|span| span.1 = slice.end)
            .or_insert((slice.start, slice.end));
    }

    order
        .iter()
        .map(|&idx| {
            let process = &processes[idx];
            spans
                .get(process.pid.as_str())
                .map(|&(start, completion)| ScheduleResult::new(process, start, completion))
                .ok_or_else(|| {
                    SimulationError::internal(&process.pid, "no execution slices recorded")
                })
        })
        .collect()
}
