//! Discrete-time CPU scheduling simulator.
//!
//! Runs classical single-CPU policies over a fixed process set and reports
//! exact per-process timings plus aggregate statistics. Every run is a pure,
//! synchronous computation over immutable input.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`Process`, `ScheduleResult`, `ExecutionSlice`, `Schedule`)
//! - **`validation`**: Workload integrity checks (duplicate pids, arrival, burst)
//! - **`dispatching`**: Selection rules and the lazily admitting ready queue
//! - **`scheduler`**: FCFS, SJF, Priority and Round-Robin engines, `SummaryMetrics`
//! - **`workload`**: Seedable random workloads and a fixed sample
//! - **`config`**: Serde-backed run configuration
//! - **`telemetry`**: `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::models::Process;
//! use cpu_sched_sim::scheduler::{simulate, Algorithm, SummaryMetrics};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//!     Process::new("P3", 2, 8),
//! ];
//! let schedule = simulate(&Algorithm::Sjf, &processes).unwrap();
//! assert_eq!(schedule.result_for("P3").unwrap().start_time, 8);
//!
//! let metrics = SummaryMetrics::calculate(&schedule);
//! assert_eq!(metrics.cpu_utilization_percent, 100.0);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod telemetry;
pub mod validation;
pub mod workload;

pub use error::{SimResult, SimulationError};
