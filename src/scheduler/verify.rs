//! Post-computation invariant checks.
//!
//! Engines never hand out a schedule that fails these checks; a failure
//! here means an engine bug, not bad input.

use std::collections::{HashMap, HashSet};

use tracing::error;

use crate::error::{SimResult, SimulationError};
use crate::models::{ExecutionSlice, Process, Schedule, ScheduleResult};

/// Verifies a finished schedule against its workload.
///
/// Checks:
/// 1. Exactly one result per process, matching its record
/// 2. `start >= arrival`, `waiting >= 0`, `turnaround = waiting + burst`
/// 3. Non-preemptive: `completion = start + burst`;
///    preemptive: `completion - start >= burst`
/// 4. Timeline: slices non-empty, ordered, non-overlapping, each process's
///    slices sum to its burst and span exactly its start..completion
///
/// # Errors
/// [`SimulationError::InternalConsistency`] naming the first offending process.
pub fn verify_schedule(
    processes: &[Process],
    schedule: &Schedule,
    preemptive: bool,
) -> SimResult<()> {
    check(processes, schedule, preemptive).inspect_err(|err| {
        error!(%err, "schedule failed verification");
    })
}

fn check(processes: &[Process], schedule: &Schedule, preemptive: bool) -> SimResult<()> {
    let mut by_pid: HashMap<&str, &ScheduleResult> = HashMap::with_capacity(processes.len());
    for r in &schedule.results {
        if by_pid.insert(r.pid.as_str(), r).is_some() {
            return Err(SimulationError::internal(&r.pid, "more than one result row"));
        }
    }

    for p in processes {
        let r = by_pid
            .get(p.pid.as_str())
            .ok_or_else(|| SimulationError::internal(&p.pid, "missing result row"))?;
        check_result(p, r, preemptive)?;
    }

    if schedule.results.len() != processes.len() {
        let known: HashSet<&str> = processes.iter().map(|p| p.pid.as_str()).collect();
        let stray = schedule
            .results
            .iter()
            .find(|r| !known.contains(r.pid.as_str()))
            .map_or("?", |r| r.pid.as_str());
        return Err(SimulationError::internal(stray, "result for unknown process"));
    }

    if preemptive {
        check_timeline(processes, &schedule.timeline, &by_pid)?;
    }
    Ok(())
}

fn check_result(p: &Process, r: &ScheduleResult, preemptive: bool) -> SimResult<()> {
    let fail = |reason: String| -> SimResult<()> {
        Err(SimulationError::internal(&p.pid, reason))
    };

    if r.arrival_time != p.arrival_time || r.burst_time != p.burst_time {
        return fail("result does not match its process record".into());
    }
    if r.start_time < p.arrival_time {
        return fail(format!(
            "started at {} before arrival at {}",
            r.start_time, p.arrival_time
        ));
    }
    if r.waiting_time < 0 {
        return fail(format!("negative waiting time {}", r.waiting_time));
    }
    if r.completion_time.checked_sub(r.arrival_time) != Some(r.turnaround_time)
        || r.waiting_time.checked_add(r.burst_time) != Some(r.turnaround_time)
    {
        return fail("turnaround does not match completion and waiting".into());
    }

    let Some(span) = r.completion_time.checked_sub(r.start_time) else {
        return fail("span outside the time range".into());
    };
    if preemptive && span < p.burst_time {
        return fail(format!("span {span} shorter than burst {}", p.burst_time));
    }
    if !preemptive && span != p.burst_time {
        return fail(format!("span {span} differs from burst {}", p.burst_time));
    }
    Ok(())
}

/// Executed units and first-start/last-end of one process on the timeline.
struct Footprint {
    executed: i64,
    first_start: i64,
    last_end: i64,
}

fn check_timeline(
    processes: &[Process],
    timeline: &[ExecutionSlice],
    by_pid: &HashMap<&str, &ScheduleResult>,
) -> SimResult<()> {
    let mut footprints: HashMap<&str, Footprint> = HashMap::with_capacity(processes.len());
    let mut previous_end = i64::MIN;

    for slice in timeline {
        if slice.end <= slice.start {
            return Err(SimulationError::internal(&slice.pid, "empty execution slice"));
        }
        if slice.start < previous_end {
            return Err(SimulationError::internal(
                &slice.pid,
                format!(
                    "slice at {} overlaps previous slice ending at {previous_end}",
                    slice.start
                ),
            ));
        }
        previous_end = slice.end;

        let duration = slice.end.checked_sub(slice.start);
        let footprint = footprints
            .entry(slice.pid.as_str())
            .or_insert(Footprint {
                executed: 0,
                first_start: slice.start,
                last_end: slice.end,
            });
        let executed = footprint.executed;
        footprint.executed = duration
            .and_then(|d| executed.checked_add(d))
            .ok_or_else(|| SimulationError::internal(&slice.pid, "executed time overflow"))?;
        footprint.last_end = slice.end;
    }

    for p in processes {
        let footprint = footprints.get(p.pid.as_str());
        let total = footprint.map_or(0, |f| f.executed);
        if total != p.burst_time {
            return Err(SimulationError::internal(
                &p.pid,
                format!("executed {total} units, burst is {}", p.burst_time),
            ));
        }

        let result = by_pid.get(p.pid.as_str());
        let agrees = match (footprint, result) {
            (Some(f), Some(r)) => {
                f.first_start == r.start_time && f.last_end == r.completion_time
            }
            _ => false,
        };
        if !agrees {
            return Err(SimulationError::internal(
                &p.pid,
                "result span disagrees with timeline",
            ));
        }
    }

    if footprints.len() != processes.len() {
        return Err(SimulationError::internal("?", "slice for unknown process"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processes() -> Vec<Process> {
        vec![Process::new("P1", 0, 3), Process::new("P2", 1, 2)]
    }

    fn valid_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_result(ScheduleResult::new(&Process::new("P1", 0, 3), 0, 3));
        s.add_result(ScheduleResult::new(&Process::new("P2", 1, 2), 3, 5));
        s
    }

    fn valid_preemptive() -> Schedule {
        let mut s = Schedule::new();
        s.add_slice(ExecutionSlice::new("P1", 0, 2));
        s.add_slice(ExecutionSlice::new("P2", 2, 4));
        s.add_slice(ExecutionSlice::new("P1", 4, 5));
        s.add_result(ScheduleResult::new(&Process::new("P1", 0, 3), 0, 5));
        s.add_result(ScheduleResult::new(&Process::new("P2", 1, 2), 2, 4));
        s
    }

    fn reason(err: SimulationError) -> String {
        match err {
            SimulationError::InternalConsistency { reason, .. } => reason,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_valid_non_preemptive() {
        assert!(verify_schedule(&processes(), &valid_schedule(), false).is_ok());
    }

    #[test]
    fn test_valid_preemptive() {
        assert!(verify_schedule(&processes(), &valid_preemptive(), true).is_ok());
    }

    #[test]
    fn test_missing_result() {
        let mut s = valid_schedule();
        s.results.pop();
        let err = verify_schedule(&processes(), &s, false).unwrap_err();
        assert_eq!(err, SimulationError::internal("P2", "missing result row"));
    }

    #[test]
    fn test_duplicate_result() {
        let mut s = valid_schedule();
        let dup = s.results[0].clone();
        s.add_result(dup);
        assert!(verify_schedule(&processes(), &s, false).is_err());
    }

    #[test]
    fn test_start_before_arrival() {
        let mut s = valid_schedule();
        s.results[1] = ScheduleResult::new(&Process::new("P2", 1, 2), 0, 2);
        let err = verify_schedule(&processes(), &s, false).unwrap_err();
        assert!(reason(err).contains("before arrival"));
    }

    #[test]
    fn test_non_preemptive_span_mismatch() {
        let mut s = valid_schedule();
        s.results[1] = ScheduleResult::new(&Process::new("P2", 1, 2), 3, 6);
        let err = verify_schedule(&processes(), &s, false).unwrap_err();
        assert!(reason(err).contains("differs from burst"));
    }

    #[test]
    fn test_overlapping_slices() {
        let mut s = valid_preemptive();
        s.timeline[1] = ExecutionSlice::new("P2", 1, 3);
        let err = verify_schedule(&processes(), &s, true).unwrap_err();
        assert!(reason(err).contains("overlaps"));
    }

    #[test]
    fn test_slice_sum_mismatch() {
        let mut s = valid_preemptive();
        s.timeline.pop();
        let err = verify_schedule(&processes(), &s, true).unwrap_err();
        assert!(reason(err).contains("executed 2 units"));
    }

    #[test]
    fn test_result_span_disagrees_with_timeline() {
        let mut s = valid_preemptive();
        s.results[0] = ScheduleResult::new(&Process::new("P1", 0, 3), 0, 6);
        let err = verify_schedule(&processes(), &s, true).unwrap_err();
        assert_eq!(
            err,
            SimulationError::internal("P1", "result span disagrees with timeline")
        );
    }

    #[test]
    fn test_wrapped_completion_rejected() {
        // A completion that wrapped past i64::MAX must not pass as a 1-unit span
        let p = Process::new("P1", i64::MAX, 1);
        let mut s = Schedule::new();
        s.add_result(ScheduleResult {
            pid: "P1".into(),
            arrival_time: i64::MAX,
            burst_time: 1,
            priority: 0,
            start_time: i64::MAX,
            completion_time: i64::MIN,
            waiting_time: 0,
            turnaround_time: 1,
        });
        assert!(verify_schedule(&[p], &s, false).is_err());
    }

    #[test]
    fn test_long_timeline() {
        let processes: Vec<Process> = (0..2_000)
            .map(|i| Process::new(format!("P{i}"), 0, 2))
            .collect();
        let mut s = Schedule::new();
        let n = processes.len() as i64;
        for (i, p) in processes.iter().enumerate() {
            let i = i as i64;
            s.add_slice(ExecutionSlice::new(p.pid.clone(), i, i + 1));
        }
        for (i, p) in processes.iter().enumerate() {
            let i = i as i64;
            s.add_slice(ExecutionSlice::new(p.pid.clone(), n + i, n + i + 1));
        }
        for (i, p) in processes.iter().enumerate() {
            let i = i as i64;
            s.add_result(ScheduleResult::new(p, i, n + i + 1));
        }
        assert!(verify_schedule(&processes, &s, true).is_ok());
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(verify_schedule(&[], &Schedule::new(), true).is_ok());
    }
}
