//! Rule-driven non-preemptive scheduling (SJF, Priority).
//!
//! # Algorithm
//!
//! 1. Admit every process that has arrived by the current time.
//! 2. If nothing is ready, idle until the next arrival.
//! 3. Otherwise dispatch the best ready process (by rule score, then
//!    arrival time, then workload position) to completion.
//! 4. Repeat until every process has run.
//!
//! # Complexity
//! O(n log n) with heap-based admission.

use tracing::trace;

use super::{advance, Scheduler};
use crate::dispatching::rules::{HighestPriority, ShortestBurst};
use crate::dispatching::{DispatchingRule, ReadyQueue};
use crate::error::SimResult;
use crate::models::{Process, Schedule, ScheduleResult};

/// Non-preemptive scheduler ordered by a dispatching rule.
#[derive(Debug, Clone, Default)]
pub struct NonPreemptiveScheduler<R> {
    rule: R,
}

/// Shortest-Job-First.
pub type SjfScheduler = NonPreemptiveScheduler<ShortestBurst>;

/// Priority scheduling (lower value first).
pub type PriorityScheduler = NonPreemptiveScheduler<HighestPriority>;

impl<R: DispatchingRule> NonPreemptiveScheduler<R> {
    /// Creates a scheduler using `rule`.
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    /// The rule selecting among ready processes.
    pub fn rule(&self) -> &R {
        &self.rule
    }
}

impl<R: DispatchingRule> Scheduler for NonPreemptiveScheduler<R> {
    fn name(&self) -> &'static str {
        self.rule.name()
    }

    fn dispatch(&self, processes: &[Process]) -> SimResult<Schedule> {
        let mut schedule = Schedule::new();
        let mut queue = ReadyQueue::new(processes, &self.rule);
        let mut current_time = 0;

        while !queue.is_exhausted() {
            queue.admit(current_time);

            let Some(idx) = queue.pop() else {
                if let Some(next) = queue.next_arrival() {
                    trace!(from = current_time, to = next, "cpu idle");
                    current_time = next;
                }
                continue;
            };

            let process = &processes[idx];
            let start = current_time;
            let completion = advance(start, process.burst_time, &process.pid)?;
            trace!(pid = %process.pid, start, completion, "dispatch");

            schedule.add_result(ScheduleResult::new(process, start, completion));
            current_time = completion;
        }

        Ok(schedule)
    }
}
