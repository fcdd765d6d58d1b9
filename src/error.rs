//! Error types for the Orthos library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`OrthosError`] enum. Malformed input is reported at the API boundary as an
//! explicit error value; it never panics inside the library.
//!
//! # Examples
//!
//! ```
//! use orthos::error::{OrthosError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(OrthosError::invalid_edit_budget("budget too large"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Orthos operations.
#[derive(Error, Debug)]
pub enum OrthosError {
    /// I/O errors (dictionary and corpus file loading).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Edit budget outside the accepted range.
    #[error("Invalid edit budget: {0}")]
    InvalidEditBudget(String),

    /// Ranking mode outside the enumerated set.
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// Language-model errors (invalid n-gram order, etc.).
    #[error("Model error: {0}")]
    Model(String),

    /// Analysis errors (tokenization, word extraction).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal errors (thread pool construction, etc.).
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with OrthosError.
pub type Result<T> = std::result::Result<T, OrthosError>;

impl OrthosError {
    /// Create a new invalid-edit-budget error.
    pub fn invalid_edit_budget<S: Into<String>>(msg: S) -> Self {
        OrthosError::InvalidEditBudget(msg.into())
    }

    /// Create a new unknown-mode error.
    pub fn unknown_mode<S: Into<String>>(msg: S) -> Self {
        OrthosError::UnknownMode(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        OrthosError::Model(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        OrthosError::Analysis(msg.into())
    }

    /// Create a new invalid-operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        OrthosError::InvalidOperation(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        OrthosError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OrthosError::invalid_edit_budget("budget 99 exceeds maximum 8");
        assert_eq!(
            err.to_string(),
            "Invalid edit budget: budget 99 exceeds maximum 8"
        );

        let err = OrthosError::unknown_mode("xyz");
        assert_eq!(err.to_string(), "Unknown mode: xyz");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err: OrthosError = io_err.into();
        assert!(matches!(err, OrthosError::Io(_)));
    }
}
