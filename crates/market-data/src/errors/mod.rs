//! Error types for the asset directory.
//!
//! Lookups never fail: an unknown ticker is reported as `None`. These errors
//! only surface while parsing caller input (category strings) or while
//! building a directory from an explicit record list.

use thiserror::Error;

/// Errors that can occur while building or querying an asset directory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The category string does not name a known asset category.
    #[error("Unknown asset category: {0}")]
    UnknownCategory(String),

    /// Two records share the same ticker (after normalization).
    #[error("Duplicate ticker in directory: {0}")]
    DuplicateTicker(String),

    /// The catalog document could not be parsed.
    #[error("Invalid asset catalog: {0}")]
    InvalidCatalog(String),
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        DirectoryError::InvalidCatalog(err.to_string())
    }
}
