//! Core error types for the Carteira application.
//!
//! This module defines storage-agnostic error types. Storage backends convert
//! their own errors into [`Error::Repository`] before returning them.

use thiserror::Error;

use carteira_market_data::DirectoryError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Asset directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Alert threshold must be greater than {min}% and at most {max}%, got {value}")]
    InvalidThreshold { value: f64, min: f64, max: f64 },

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_error_message() {
        let err: Error = ValidationError::InvalidThreshold {
            value: 150.0,
            min: 0.0,
            max: 100.0,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Input validation failed: Alert threshold must be greater than 0% and at most 100%, got 150"
        );
    }

    #[test]
    fn test_directory_error_converts() {
        let err: Error = DirectoryError::UnknownCategory("OPTION".to_string()).into();
        assert!(matches!(err, Error::Directory(_)));
        let message: String = err.into();
        assert_eq!(message, "Asset directory error: Unknown asset category: OPTION");
    }
}
