//! Ready queue with lazy arrival admission.
//!
//! Processes wait in arrival order until the clock reaches them, then move
//! into a min-heap keyed by `(rule score, arrival time, workload position)`.
//! Admission and selection are both O(log n).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{arrival_order, DispatchingRule, RuleScore};
use crate::models::Process;

type ReadyKey = Reverse<(RuleScore, i64, usize)>;

/// Ready queue for non-preemptive dispatch.
#[derive(Debug)]
pub struct ReadyQueue<'a, R: DispatchingRule> {
    processes: &'a [Process],
    rule: &'a R,
    pending: Vec<usize>,
    cursor: usize,
    ready: BinaryHeap<ReadyKey>,
}

impl<'a, R: DispatchingRule> ReadyQueue<'a, R> {
    /// Creates a queue over `processes`; nothing is admitted yet.
    pub fn new(processes: &'a [Process], rule: &'a R) -> Self {
        Self {
            processes,
            rule,
            pending: arrival_order(processes),
            cursor: 0,
            ready: BinaryHeap::with_capacity(processes.len()),
        }
    }

    /// Admits every pending process that has arrived by `now`.
    ///
    /// Returns the number of processes admitted.
    pub fn admit(&mut self, now: i64) -> usize {
        let before = self.cursor;
        while let Some(&idx) = self.pending.get(self.cursor) {
            let process = &self.processes[idx];
            if !process.has_arrived(now) {
                break;
            }
            let score = self.rule.evaluate(process);
            self.ready.push(Reverse((score, process.arrival_time, idx)));
            self.cursor += 1;
        }
        self.cursor - before
    }

    /// Removes and returns the index of the best ready process.
    pub fn pop(&mut self) -> Option<usize> {
        self.ready.pop().map(|Reverse((_, _, idx))| idx)
    }

    /// Arrival time of the next process not yet admitted.
    pub fn next_arrival(&self) -> Option<i64> {
        self.pending
            .get(self.cursor)
            .map(|&idx| self.processes[idx].arrival_time)
    }

    /// Number of admitted, undispatched processes.
    pub fn len(&self) -> usize {
        self.ready.len()
    }

    /// Whether no admitted process is waiting.
    pub fn is_empty(&self) -> bool {
        self.ready.is_empty()
    }

    /// Whether every process has been admitted and dispatched.
    pub fn is_exhausted(&self) -> bool {
        self.ready.is_empty() && self.cursor == self.pending.len()
    }
}
