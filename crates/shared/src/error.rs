//! Application-wide error types.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed client input.
    #[error("{0}")]
    Validation(String),

    /// Storage is not configured or not reachable.
    #[error("{0}")]
    StorageUnavailable(String),

    /// Storage returned an error while running a query or mutation.
    #[error("{0}")]
    Storage(String),
}

impl AppError {
    /// Error raised by every storage-backed operation when no database is configured.
    #[must_use]
    pub fn storage_not_configured() -> Self {
        Self::StorageUnavailable("Storage not configured".to_string())
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::StorageUnavailable(_) => 503,
            Self::Storage(_) => 500,
        }
    }

    /// Returns the error code for logs and metrics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}
