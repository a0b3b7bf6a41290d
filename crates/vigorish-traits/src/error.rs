//! Error types for the Vigorish engine.
//!
//! This module defines the error types used throughout the Vigorish
//! ecosystem, covering signal evaluation, context validation, and data
//! fetching.

use thiserror::Error;

/// The main error type for Vigorish operations.
///
/// This enum encompasses all error cases that can occur when evaluating
/// signals and assembling confidence scores.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Error during signal evaluation.
    #[error("Signal evaluation failed: {0}")]
    SignalEvaluation(String),

    /// Error when a required context field is missing.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Error when a signal produces a non-finite score.
    #[error("Signal '{name}' produced invalid score: {value}")]
    InvalidScore {
        /// The name of the offending signal.
        name: String,
        /// The non-finite score it produced.
        value: f64,
    },

    /// Error when a signal name is not recognized.
    #[error("Signal not found: {0}")]
    SignalNotFound(String),

    /// Error when a date is out of range or invalid.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Error fetching data from external sources.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for EngineError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for EngineError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Vigorish operations.
///
/// This is a convenience type that uses [`EngineError`] as the error type.
pub type Result<T> = std::result::Result<T, EngineError>;
