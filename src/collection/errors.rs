//! # Collection Directory Errors

use thiserror::Error;

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Collection directory errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// No collection matches the reference
    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    /// A collection with this name already exists
    #[error("duplicate collection name: {0}")]
    DuplicateName(String),

    /// Name does not satisfy the collection naming rules
    #[error("illegal collection name: {0}")]
    IllegalName(String),

    /// Directory lock poisoned by a panicking writer
    #[error("collection directory lock poisoned")]
    LockPoisoned,
}
