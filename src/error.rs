//! Custom error types for jobcost
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for jobcost operations
#[derive(Error, Debug)]
pub enum JobCostError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Input that failed typing or range checks in the input layer
    #[error("Validation error: {0}")]
    Validation(String),

    /// The spreadsheet (or other export format) could not be encoded
    #[error("Export error: {0}")]
    Export(String),

    /// Export log errors
    #[error("Audit error: {0}")]
    Audit(String),
}

impl JobCostError {
    /// Create a validation error for a field that did not parse as a number
    pub fn not_a_number(field: &str, raw: impl AsRef<str>) -> Self {
        Self::Validation(format!("{} must be a number, got '{}'", field, raw.as_ref()))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an export (encoding) error
    pub fn is_export(&self) -> bool {
        matches!(self, Self::Export(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for JobCostError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for JobCostError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for JobCostError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for JobCostError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for jobcost operations
pub type JobCostResult<T> = Result<T, JobCostError>;
