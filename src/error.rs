//! Custom error types for tripsplit
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for tripsplit operations
#[derive(Error, Debug)]
pub enum TripError {
    /// Total budget is negative or not a number
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),

    /// A share computation needs at least one participant
    #[error("At least one participant is required")]
    EmptyParticipants,

    /// Expense with a non-positive amount or a payer who is not a participant
    #[error("Malformed expense paid by '{payer}': {reason}")]
    MalformedExpense { payer: String, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Generic validation errors for input data
    #[error("Validation error: {0}")]
    Validation(String),
}

impl TripError {
    /// Create a malformed expense error
    pub fn malformed_expense(payer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedExpense {
            payer: payer.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error was raised while checking a budget request
    ///
    /// Covers the request taxonomy plus generic `Validation` failures such as
    /// blank participant names.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidBudget(_)
                | Self::EmptyParticipants
                | Self::MalformedExpense { .. }
                | Self::Validation(_)
        )
    }
}

impl From<std::io::Error> for TripError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TripError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for TripError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for TripError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for tripsplit operations
pub type TripResult<T> = Result<T, TripError>;
