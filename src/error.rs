// src/error.rs
// Standardized error types for the helpdesk tool layer

use thiserror::Error;

/// Main error type for the helpdesk library.
///
/// The first three variants are the caller-facing taxonomy: invalid input,
/// missing referenced entity, and store-level/internal failure. `Db` wraps
/// raw SQLite errors and is surfaced to callers as an internal failure.
#[derive(Error, Debug)]
pub enum HelpdeskError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
}

/// Convenience type alias for Result using HelpdeskError
pub type Result<T> = std::result::Result<T, HelpdeskError>;

impl From<HelpdeskError> for String {
    fn from(err: HelpdeskError) -> Self {
        err.to_string()
    }
}
