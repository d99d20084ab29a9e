//! Synthetic workload generation.
//!
//! Produces process sets for simulation runs: random ones with optional
//! seeding for reproducibility, and a fixed sample for demonstrations.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SimResult, SimulationError};
use crate::models::Process;

/// Parameters for random workload generation.
///
/// Arrival times are drawn from `0..=max_arrival`, burst times from
/// `1..=max_burst` and priorities from `1..=max_priority`.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::workload::WorkloadGenerator;
///
/// let a = WorkloadGenerator::new(8).with_seed(42).generate().unwrap();
/// let b = WorkloadGenerator::new(8).with_seed(42).generate().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadGenerator {
    /// Number of processes to generate.
    pub process_count: usize,
    /// RNG seed. `None` = seeded from the OS.
    pub seed: Option<u64>,
    /// Latest possible arrival time.
    pub max_arrival: i64,
    /// Largest possible burst time.
    pub max_burst: i64,
    /// Largest possible priority value.
    pub max_priority: i32,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            process_count: 5,
            seed: Some(42),
            max_arrival: 10,
            max_burst: 10,
            max_priority: 5,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator for `process_count` processes with default ranges.
    pub fn new(process_count: usize) -> Self {
        Self {
            process_count,
            ..Default::default()
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draws the seed from the OS on each call.
    pub fn unseeded(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the largest burst time.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Sets the largest priority value.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Checks that every range is non-empty.
    pub fn validate(&self) -> SimResult<()> {
        if self.process_count == 0 {
            return Err(SimulationError::InvalidConfig(
                "process_count must be greater than 0".into(),
            ));
        }
        if self.max_arrival < 0 {
            return Err(SimulationError::InvalidConfig(
                "max_arrival must not be negative".into(),
            ));
        }
        if self.max_burst < 1 {
            return Err(SimulationError::InvalidConfig(
                "max_burst must be at least 1".into(),
            ));
        }
        if self.max_priority < 1 {
            return Err(SimulationError::InvalidConfig(
                "max_priority must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Generates processes `P1..Pn`, sorted by arrival time.
    pub fn generate(&self) -> SimResult<Vec<Process>> {
        self.validate()?;

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let mut processes: Vec<Process> = (1..=self.process_count)
            .map(|i| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(1..=self.max_burst);
                let priority = rng.random_range(1..=self.max_priority);
                Process::new(format!("P{i}"), arrival, burst).with_priority(priority)
            })
            .collect();
        processes.sort_by_key(|p| p.arrival_time);

        debug!(
            processes = processes.len(),
            seed = ?self.seed,
            "workload generated"
        );
        Ok(processes)
    }
}

/// A fixed five-process workload.
///
/// | PID | Arrival | Burst | Priority |
/// |-----|---------|-------|----------|
/// | P1 | 0 | 5 | 2 |
/// | P2 | 2 | 3 | 1 |
/// | P3 | 4 | 1 | 3 |
/// | P4 | 5 | 2 | 2 |
/// | P5 | 6 | 4 | 1 |
pub fn sample_workload() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 5).with_priority(2),
        Process::new("P2", 2, 3).with_priority(1),
        Process::new("P3", 4, 1).with_priority(3),
        Process::new("P4", 5, 2).with_priority(2),
        Process::new("P5", 6, 4).with_priority(1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_workload;

    #[test]
    fn test_generate_within_ranges() {
        let processes = WorkloadGenerator::new(50)
            .with_seed(3)
            .with_max_arrival(4)
            .with_max_burst(6)
            .with_max_priority(2)
            .generate()
            .unwrap();

        assert_eq!(processes.len(), 50);
        for p in &processes {
            assert!((0..=4).contains(&p.arrival_time));
            assert!((1..=6).contains(&p.burst_time));
            assert!((1..=2).contains(&p.priority));
        }
    }

    #[test]
    fn test_generate_sorted_and_valid() {
        let processes = WorkloadGenerator::new(15).with_seed(11).generate().unwrap();
        assert!(processes
            .windows(2)
            .all(|w| w[0].arrival_time <= w[1].arrival_time));
        assert!(validate_workload(&processes).is_ok());
    }

    #[test]
    fn test_generate_pids() {
        let mut pids: Vec<String> = WorkloadGenerator::new(3)
            .generate()
            .unwrap()
            .into_iter()
            .map(|p| p.pid)
            .collect();
        pids.sort();
        assert_eq!(pids, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_seed_reproducible() {
        let a = WorkloadGenerator::new(10).with_seed(99).generate().unwrap();
        let b = WorkloadGenerator::new(10).with_seed(99).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unseeded_generates() {
        let processes = WorkloadGenerator::new(4).unseeded().generate().unwrap();
        assert_eq!(processes.len(), 4);
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(WorkloadGenerator::new(0).generate().is_err());
        assert!(WorkloadGenerator::new(3).with_max_burst(0).generate().is_err());
        assert!(WorkloadGenerator::new(3).with_max_arrival(-1).generate().is_err());
        assert!(WorkloadGenerator::new(3).with_max_priority(0).generate().is_err());
    }

    #[test]
    fn test_generator_serde_defaults() {
        let generator: WorkloadGenerator =
            serde_json::from_str(r#"{"process_count": 9}"#).unwrap();
        assert_eq!(generator.process_count, 9);
        assert_eq!(generator.seed, Some(42));
        assert_eq!(generator.max_burst, 10);
    }

    #[test]
    fn test_sample_workload() {
        let processes = sample_workload();
        assert_eq!(processes.len(), 5);
        assert!(validate_workload(&processes).is_ok());
        assert_eq!(processes[4].priority, 1);
    }
}
