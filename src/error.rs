//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised before a timetabling run starts.
///
/// Nothing fails once evolution has begun: missing professors, degenerate
/// crossovers and unresolvable clashes are absorbed by fallbacks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimetableError {
    /// The problem input is malformed.
    #[error("invalid timetabling problem: {}", join_messages(.0))]
    Configuration(Vec<ValidationError>),

    /// The GA parameters are out of range.
    #[error("invalid GA configuration: {0}")]
    InvalidGaConfig(String),
}

impl From<Vec<ValidationError>> for TimetableError {
    fn from(errors: Vec<ValidationError>) -> Self {
        TimetableError::Configuration(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
