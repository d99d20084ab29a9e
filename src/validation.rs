//! Input validation for simulation workloads.
//!
//! Checks the integrity of a process set before any engine runs.
//! Detects:
//! - Duplicate process IDs
//! - Empty process IDs
//! - Negative arrival times
//! - Burst times below one time unit
//! - Workloads whose time horizon does not fit in `i64`
//!
//! Bad records are rejected, never normalized.

use std::collections::HashSet;

use thiserror::Error;
use tracing::warn;

use crate::error::{SimResult, SimulationError};
use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same pid.
    DuplicatePid,
    /// A process has an empty pid.
    EmptyPid,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs less than one unit of CPU time.
    InvalidBurst,
    /// Latest arrival plus total burst exceeds `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a workload.
///
/// Checks:
/// 1. Every pid is non-empty
/// 2. No duplicate pids
/// 3. `arrival_time >= 0`
/// 4. `burst_time >= 1`
/// 5. `max(arrival_time) + sum(burst_time)` fits in `i64`
///
/// Check 5 bounds every instant an engine can reach, so no engine
/// arithmetic can overflow on an accepted workload.
///
/// An empty workload is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();
    let mut latest_arrival: i64 = 0;
    let mut total_burst: Option<i64> = Some(0);

    for (idx, p) in processes.iter().enumerate() {
        if p.pid.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyPid,
                format!("Process at position {idx} has an empty pid"),
            ));
        } else if !pids.insert(p.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.pid, p.arrival_time
                ),
            ));
        }

        if p.burst_time < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!(
                    "Process '{}' has burst time {} (must be at least 1)",
                    p.pid, p.burst_time
                ),
            ));
        }

        latest_arrival = latest_arrival.max(p.arrival_time);
        total_burst = total_burst.and_then(|sum| sum.checked_add(p.burst_time.max(0)));
    }

    if total_burst
        .and_then(|sum| latest_arrival.checked_add(sum))
        .is_none()
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!(
                "Workload ends past the representable time range (latest arrival {latest_arrival})"
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a workload and lifts failures into [`SimulationError`].
pub(crate) fn ensure_valid_workload(processes: &[Process]) -> SimResult<()> {
    validate_workload(processes).map_err(|errors| {
        warn!(issues = errors.len(), "workload rejected");
        SimulationError::InvalidWorkload(errors)
    })
}
