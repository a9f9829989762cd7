use std::io;
use thiserror::Error;

/// Application-wide error type for the store, collaborators and configuration.
///
/// The analysis and draft layers never produce one of these; they degrade to
/// empty results instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents errors originating from the SQLite store.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Represents standard input/output errors (file reads, clipboard).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A document, version or analysis was looked up by an id that does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Represents data validation errors (e.g., an empty document name).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., an unusable data directory).
    #[error("Configuration error: {0}")]
    Config(String),

    /// An internal invariant broke (e.g., a poisoned lock).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}
