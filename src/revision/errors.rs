//! # Revision Store Errors

use thiserror::Error;

use crate::collection::DirectoryError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Revision store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Collection reference did not resolve
    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    /// Collection resolved but the key is absent
    #[error("document not found: {0}")]
    DocumentNotFound(String),

    /// Document bodies must be JSON objects
    #[error("document body must be a JSON object")]
    InvalidBody,

    /// Storage lock poisoned by a panicking writer
    #[error("storage lock poisoned")]
    LockPoisoned,

    /// Unexpected collaborator failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DirectoryError> for StoreError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::CollectionNotFound(reference) => {
                StoreError::CollectionNotFound(reference)
            }
            DirectoryError::LockPoisoned => StoreError::LockPoisoned,
            other => StoreError::Internal(other.to_string()),
        }
    }
}
