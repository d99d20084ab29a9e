//! Tracing setup for binaries and tests embedding the simulator.
//!
//! Engines log under the `cpu_sched_sim` target:
//! - `warn`: rejected workloads
//! - `error`: schedules failing post-run verification
//! - `info`: finished reports
//! - `debug`: run start and finish per policy
//! - `trace`: every dispatch, slice and idle gap

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "cpu_sched_sim=warn";

/// Installs an env-filtered `fmt` subscriber unless one is already set.
///
/// `RUST_LOG=cpu_sched_sim=trace` shows every dispatch and slice; without
/// `RUST_LOG` only [`DEFAULT_FILTER`] applies.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
