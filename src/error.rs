//! Custom error types for FinanceFlow
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for FinanceFlow operations
#[derive(Error, Debug)]
pub enum FlowError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected input (non-positive amounts, unknown transaction types)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FlowError {
    /// Create a validation error for a non-positive amount
    pub fn non_positive_amount(amount: f64) -> Self {
        Self::Validation(format!("Amount must be positive, got {}", amount))
    }

    /// Create a validation error for an unknown transaction type
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::Validation(format!(
            "Unknown transaction type '{}' (expected income or expense)",
            kind.into()
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for FlowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for FlowError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for FlowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for FinanceFlow operations
pub type FlowResult<T> = Result<T, FlowError>;
