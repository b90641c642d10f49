//! Bookkeeping error types for validation and storage failures.

use cajachica_shared::AppError;
use thiserror::Error;

/// Errors that can occur during bookkeeping operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookkeepingError {
    // ========== Validation Errors ==========
    /// Month/year could not be resolved into a calendar period.
    #[error("{0}")]
    InvalidPeriod(String),

    /// A required input field was absent.
    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    /// Description is empty or whitespace only.
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// Amount must be strictly positive.
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    /// Amount does not fit the ledger's NUMERIC(14,2) column.
    #[error("Amount exceeds the maximum of {0}")]
    AmountOutOfRange(rust_decimal::Decimal),

    /// Units must be strictly positive.
    #[error("Units must be greater than zero")]
    NonPositiveUnits,

    /// Units do not fit the stored integer column.
    #[error("Units exceed the maximum of {0}")]
    UnitsOutOfRange(i32),

    /// Stock outflows must say whether they were a sale or a giveaway.
    #[error("Outgoing movements require a subtype (venta or regalia)")]
    MissingSubtype,

    // ========== Storage Errors ==========
    /// Storage collaborator failed; the driver message is kept verbatim.
    #[error("{0}")]
    Storage(String),
}

impl BookkeepingError {
    /// Returns the error code for logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPeriod(_) => "INVALID_PERIOD",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::EmptyDescription => "EMPTY_DESCRIPTION",
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::AmountOutOfRange(_) => "AMOUNT_OUT_OF_RANGE",
            Self::NonPositiveUnits => "NON_POSITIVE_UNITS",
            Self::UnitsOutOfRange(_) => "UNITS_OUT_OF_RANGE",
            Self::MissingSubtype => "MISSING_SUBTYPE",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        if self.is_validation() { 400 } else { 500 }
    }

    /// Returns true if the client must correct its input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }

    /// Wraps a storage driver error.
    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<BookkeepingError> for AppError {
    fn from(err: BookkeepingError) -> Self {
        match err {
            BookkeepingError::Storage(message) => Self::Storage(message),
            other => Self::Validation(other.to_string()),
        }
    }
}
