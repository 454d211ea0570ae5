//! Core error types for the portfolio accounting application.
//!
//! This module defines storage-agnostic error types. Store-specific errors
//! are converted to these types by the storage layer.

use serde::Serialize;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Accounting calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for persistence operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert store-specific errors into this format.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A record referenced another record that does not exist.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Internal/unexpected storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Errors that occur during ledger aggregation.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Invalid trade data: {0}")]
    InvalidTrade(String),

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

/// A single violated field reported by a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldViolation {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn render_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validation failure carrying the full set of violated fields.
///
/// A validation pass runs to completion and reports every violation at once,
/// so callers can surface all of them to the end user in a single round trip.
#[derive(Error, Debug)]
#[error("{}", render_violations(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        ValidationError { violations }
    }

    /// Shorthand for a single-field failure.
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError {
            violations: vec![FieldViolation::new(field, message)],
        }
    }

    /// Returns true if the given field is among the violations.
    pub fn mentions(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
