//! Store-specific error types.

use thiserror::Error;

use super::validation::ValidationError;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
///
/// Both variants are client errors: a failed operation never mutates the
/// store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The payload failed the required-field or type checks.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No record exists for the requested identifier.
    #[error("{detail}")]
    NotFound {
        /// Client-facing message, e.g. "book not found".
        detail: &'static str,
    },
}

impl StoreError {
    /// Create a new "not found" error with the given detail message.
    pub fn not_found(detail: &'static str) -> Self {
        Self::NotFound { detail }
    }

    /// Whether this error reports a missing record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error reports an invalid payload.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
