//! Error types for simulation runs.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors produced by the scheduling engines and their configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Round-Robin quantum below 1.
    #[error("invalid quantum {0}: must be at least 1")]
    InvalidQuantum(i64),
    /// Workload rejected at ingestion.
    #[error("invalid workload: {}", join_messages(.0))]
    InvalidWorkload(Vec<ValidationError>),
    /// Configuration value out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Engine produced a result that breaks a scheduling invariant.
    #[error("internal consistency fault for process '{pid}': {reason}")]
    InternalConsistency {
        /// Offending process.
        pid: String,
        /// What went wrong.
        reason: String,
    },
}

impl SimulationError {
    pub(crate) fn internal(pid: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InternalConsistency {
            pid: pid.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type SimResult<T> = Result<T, SimulationError>;

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_quantum() {
        let err = SimulationError::InvalidQuantum(0);
        assert_eq!(err.to_string(), "invalid quantum 0: must be at least 1");
    }

    #[test]
    fn test_display_workload_joins_messages() {
        let err = SimulationError::InvalidWorkload(vec![
            ValidationError::new(ValidationErrorKind::DuplicatePid, "Duplicate pid: P1"),
            ValidationError::new(ValidationErrorKind::InvalidBurst, "bad burst"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid workload: Duplicate pid: P1; bad burst"
        );
    }

    #[test]
    fn test_display_internal() {
        let err = SimulationError::internal("P3", "no execution slices recorded");
        assert_eq!(
            err.to_string(),
            "internal consistency fault for process 'P3': no execution slices recorded"
        );
    }
}
