//! Core error types for Cardfolio.
//!
//! Errors raised inside a pipeline stage are caught at that stage's boundary
//! and converted into `ValidationResult` entries; only the context holder,
//! the file loader and target setters surface them to callers.

use thiserror::Error;

use crate::import::ImportError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Portfolio sink failed: {0}")]
    Sink(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user-supplied settings.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Target percentages must sum to 100, got {0}")]
    TargetSum(String),

    #[error("Target percentage for '{0}' cannot be negative")]
    NegativeTarget(String),

    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
