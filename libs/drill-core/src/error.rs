//! Error types for drill-core.

use crate::types::WordId;
use thiserror::Error;

/// Result type alias using DrillError.
pub type Result<T> = std::result::Result<T, DrillError>;

/// Errors raised by drill operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrillError {
    #[error("word {id} not found")]
    NotFound { id: WordId },

    #[error("only {available} distinct answer options available")]
    InsufficientOptions { available: usize },

    #[error("{unmastered} words left unmastered but none can be scheduled")]
    InconsistentState { unmastered: usize },
}

/// Errors that can occur while parsing a word list.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing ID for entry at line {line}")]
    MissingId { line: usize },

    #[error("invalid ID format at line {line}: {value}")]
    InvalidId { line: usize, value: String },

    #[error("duplicate ID {id} at line {line}")]
    DuplicateId { id: WordId, line: usize },

    #[error("missing word at line {line}")]
    MissingText { line: usize },

    #[error("missing meaning at line {line}")]
    MissingMeaning { line: usize },

    #[error("repeated {field} field at line {line}")]
    RepeatedField { field: &'static str, line: usize },
}
