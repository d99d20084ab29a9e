//! Simulation run configuration.
//!
//! A [`SimulationConfig`] names the policy, its quantum and the workload to
//! generate. It deserializes from any serde format; missing fields take
//! their defaults.
//!
//! ```
//! use cpu_sched_sim::config::{AlgorithmKind, SimulationConfig};
//!
//! let config = SimulationConfig::round_robin(3);
//! let report = config.run().unwrap();
//! assert_eq!(report.schedule.result_count(), 5);
//! assert_eq!(config.algorithm, AlgorithmKind::RoundRobin);
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{SimResult, SimulationError};
use crate::models::{Process, Schedule};
use crate::scheduler::{simulate, Algorithm, SummaryMetrics};
use crate::workload::WorkloadGenerator;

/// Policy selection without parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// First-Come-First-Serve.
    #[default]
    Fcfs,
    /// Shortest-Job-First.
    Sjf,
    /// Priority scheduling.
    Priority,
    /// Round-Robin; requires a quantum.
    RoundRobin,
}

/// Configuration of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Policy to simulate.
    pub algorithm: AlgorithmKind,
    /// Round-Robin quantum. Ignored by other policies.
    pub quantum: Option<i64>,
    /// Workload to generate.
    pub workload: WorkloadGenerator,
}

/// Everything produced by one run: input, output and metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Policy that produced the schedule.
    pub algorithm: Algorithm,
    /// Workload the policy ran over.
    pub processes: Vec<Process>,
    /// Per-process results and timeline.
    pub schedule: Schedule,
    /// Aggregate statistics.
    pub metrics: SummaryMetrics,
}

impl SimulationConfig {
    /// Creates a configuration for `algorithm` with the default workload.
    pub fn new(algorithm: AlgorithmKind) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Creates a Round-Robin configuration with the default workload.
    pub fn round_robin(quantum: i64) -> Self {
        Self::new(AlgorithmKind::RoundRobin).with_quantum(quantum)
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets the workload generator.
    pub fn with_workload(mut self, workload: WorkloadGenerator) -> Self {
        self.workload = workload;
        self
    }

    /// Resolves the configured policy.
    ///
    /// # Errors
    /// - [`SimulationError::InvalidConfig`] for Round-Robin without a quantum
    /// - [`SimulationError::InvalidQuantum`] for a quantum below 1
    pub fn algorithm(&self) -> SimResult<Algorithm> {
        match self.algorithm {
            AlgorithmKind::Fcfs => Ok(Algorithm::Fcfs),
            AlgorithmKind::Sjf => Ok(Algorithm::Sjf),
            AlgorithmKind::Priority => Ok(Algorithm::Priority),
            AlgorithmKind::RoundRobin => match self.quantum {
                None => Err(SimulationError::InvalidConfig(
                    "round_robin requires a quantum".into(),
                )),
                Some(quantum) if quantum < 1 => Err(SimulationError::InvalidQuantum(quantum)),
                Some(quantum) => Ok(Algorithm::RoundRobin { quantum }),
            },
        }
    }

    /// Validates all configuration values.
    pub fn validate(&self) -> SimResult<()> {
        self.algorithm()?;
        self.workload.validate()
    }

    /// Generates the workload and simulates the configured policy over it.
    pub fn run(&self) -> SimResult<SimulationReport> {
        let algorithm = self.algorithm()?;
        let processes = self.workload.generate()?;
        SimulationReport::new(algorithm, processes)
    }
}

impl SimulationReport {
    /// Simulates `algorithm` over a caller-supplied workload.
    pub fn new(algorithm: Algorithm, processes: Vec<Process>) -> SimResult<Self> {
        let schedule = simulate(&algorithm, &processes)?;
        let metrics = SummaryMetrics::calculate(&schedule);
        info!(
            policy = algorithm.name(),
            processes = processes.len(),
            avg_waiting = metrics.average_waiting_time,
            avg_turnaround = metrics.average_turnaround_time,
            cpu_utilization = metrics.cpu_utilization_percent,
            "simulation complete"
        );
        Ok(Self {
            algorithm,
            processes,
            schedule,
            metrics,
        })
    }
}
