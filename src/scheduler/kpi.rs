//! Summary metrics for a completed simulation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Waiting Time | mean(completion - arrival - burst) |
//! | Average Turnaround Time | mean(completion - arrival) |
//! | CPU Utilization (%) | 100 * sum(burst) / (max(completion) - min(arrival)) |
//!
//! All values are rounded to two decimal places.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{Schedule, ScheduleResult};

/// Aggregate performance of one simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Share of the makespan the CPU was busy, in percent.
    pub cpu_utilization_percent: f64,
}

impl SummaryMetrics {
    /// Computes metrics from a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        Self::from_results(&schedule.results)
    }

    /// Computes metrics from result rows.
    ///
    /// Empty input yields all zeros; a zero makespan yields 0% utilization.
    pub fn from_results(results: &[ScheduleResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let count = results.len() as f64;
        // i128 sums: n times near i64::MAX still add up exactly
        let total_waiting: i128 = results.iter().map(|r| i128::from(r.waiting_time)).sum();
        let total_turnaround: i128 = results.iter().map(|r| i128::from(r.turnaround_time)).sum();
        let total_burst: i128 = results.iter().map(|r| i128::from(r.burst_time)).sum();

        let first_arrival = results.iter().map(|r| r.arrival_time).min().unwrap_or(0);
        let last_completion = results.iter().map(|r| r.completion_time).max().unwrap_or(0);
        let makespan = i128::from(last_completion) - i128::from(first_arrival);

        let cpu_utilization = if makespan > 0 {
            100.0 * total_burst as f64 / makespan as f64
        } else {
            0.0
        };

        Self {
            average_waiting_time: round2(total_waiting as f64 / count),
            average_turnaround_time: round2(total_turnaround as f64 / count),
            cpu_utilization_percent: round2(cpu_utilization),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn result(pid: &str, arrival: i64, burst: i64, start: i64, completion: i64) -> ScheduleResult {
        ScheduleResult::new(&Process::new(pid, arrival, burst), start, completion)
    }

    #[test]
    fn test_metrics_basic() {
        let results = vec![
            result("P1", 0, 5, 0, 5),
            result("P2", 1, 3, 5, 8),
            result("P3", 2, 8, 8, 16),
        ];
        let m = SummaryMetrics::from_results(&results);
        // waits 0, 4, 6 → 3.33; turnarounds 5, 7, 14 → 8.67
        assert!((m.average_waiting_time - 3.33).abs() < 1e-10);
        assert!((m.average_turnaround_time - 8.67).abs() < 1e-10);
        assert!((m.cpu_utilization_percent - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_idle_time() {
        let results = vec![result("P1", 0, 2, 0, 2), result("P2", 5, 3, 5, 8)];
        let m = SummaryMetrics::from_results(&results);
        // 5 busy units over makespan 8
        assert!((m.cpu_utilization_percent - 62.5).abs() < 1e-10);
        assert!((m.average_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_rounding() {
        let results = vec![result("P1", 0, 1, 0, 1), result("P2", 2, 1, 2, 3)];
        let m = SummaryMetrics::from_results(&results);
        // 2 / 3 → 66.67
        assert!((m.cpu_utilization_percent - 66.67).abs() < 1e-10);
        assert!((m.average_turnaround_time - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_makespan_from_first_arrival() {
        let results = vec![result("P1", 3, 2, 3, 5)];
        let m = SummaryMetrics::from_results(&results);
        assert!((m.cpu_utilization_percent - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_preemptive_waiting() {
        // Round-Robin q=2 over (P1,0,5), (P2,1,3)
        let results = vec![result("P1", 0, 5, 0, 8), result("P2", 1, 3, 2, 7)];
        let m = SummaryMetrics::from_results(&results);
        assert!((m.average_waiting_time - 3.0).abs() < 1e-10);
        assert!((m.average_turnaround_time - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_near_time_limit() {
        // Turnarounds h and 2h sum past i64::MAX
        let h = i64::MAX / 2;
        let results = vec![result("P1", 0, h, 0, h), result("P2", 0, h, h, 2 * h)];
        let m = SummaryMetrics::from_results(&results);
        let h = h as f64;
        assert!((m.average_waiting_time - h / 2.0).abs() / h < 1e-12);
        assert!((m.average_turnaround_time - 1.5 * h).abs() / h < 1e-12);
        assert!((m.cpu_utilization_percent - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty() {
        let m = SummaryMetrics::calculate(&Schedule::new());
        assert_eq!(m, SummaryMetrics::default());
        assert!((m.cpu_utilization_percent - 0.0).abs() < 1e-10);
        assert!(!m.average_waiting_time.is_nan());
    }

    #[test]
    fn test_metrics_serde() {
        let m = SummaryMetrics {
            average_waiting_time: 1.5,
            average_turnaround_time: 4.25,
            cpu_utilization_percent: 80.0,
        };
        let json = serde_json::to_string(&m).unwrap();
        let back: SummaryMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
