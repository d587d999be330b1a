//! # Read Errors
//!
//! The read path's error taxonomy. Every variant is terminal and maps to
//! exactly one stable error number; the HTTP layer adds the status code.

use thiserror::Error;

use crate::handle::HandleError;
use crate::revision::{CurrentDocument, StoreError};

/// Result type for read operations
pub type ReadResult<T> = Result<T, ReadError>;

/// Stable error numbers clients pattern-match on.
pub mod error_num {
    pub const INTERNAL: u32 = 4;
    pub const CONFLICT: u32 = 1200;
    pub const DOCUMENT_NOT_FOUND: u32 = 1202;
    pub const COLLECTION_NOT_FOUND: u32 = 1203;
    pub const COLLECTION_PARAMETER_MISSING: u32 = 1204;
    pub const DOCUMENT_HANDLE_BAD: u32 = 1205;
}

/// Read path errors
#[derive(Debug, Clone, Error)]
pub enum ReadError {
    /// Handle does not match `<collection>/<key>`
    #[error("illegal document handle: {0}")]
    MalformedHandle(String),

    /// Handle has an empty collection segment
    #[error("collection not found: missing collection in '{0}'")]
    UnnamedCollection(String),

    /// Collection segment well-formed but unresolvable
    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    /// Collection resolved but key absent
    #[error("document not found: {0}")]
    DocumentNotFound(String),

    /// Conditional header mismatch; carries the true current state
    #[error("precondition failed")]
    PreconditionFailed(Box<CurrentDocument>),

    /// Enumeration without a collection reference
    #[error("collection parameter missing")]
    CollectionParameterMissing,

    /// Collaborator failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl ReadError {
    /// Stable error number of this error.
    pub fn error_num(&self) -> u32 {
        match self {
            ReadError::MalformedHandle(_) => error_num::DOCUMENT_HANDLE_BAD,
            ReadError::UnnamedCollection(_) => error_num::COLLECTION_NOT_FOUND,
            ReadError::CollectionNotFound(_) => error_num::COLLECTION_NOT_FOUND,
            ReadError::DocumentNotFound(_) => error_num::DOCUMENT_NOT_FOUND,
            ReadError::PreconditionFailed(_) => error_num::CONFLICT,
            ReadError::CollectionParameterMissing => error_num::COLLECTION_PARAMETER_MISSING,
            ReadError::Internal(_) => error_num::INTERNAL,
        }
    }
}

impl From<HandleError> for ReadError {
    fn from(err: HandleError) -> Self {
        match err {
            HandleError::EmptyCollectionSegment(raw) => ReadError::UnnamedCollection(raw),
            HandleError::Malformed(raw) | HandleError::MalformedKey(raw) => {
                ReadError::MalformedHandle(raw)
            }
        }
    }
}

impl From<StoreError> for ReadError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CollectionNotFound(reference) => ReadError::CollectionNotFound(reference),
            StoreError::DocumentNotFound(handle) => ReadError::DocumentNotFound(handle),
            other => ReadError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_numbers() {
        assert_eq!(ReadError::MalformedHandle("x".into()).error_num(), 1205);
        assert_eq!(ReadError::UnnamedCollection("/1".into()).error_num(), 1203);
        assert_eq!(ReadError::CollectionNotFound("1".into()).error_num(), 1203);
        assert_eq!(ReadError::DocumentNotFound("c/1".into()).error_num(), 1202);
        assert_eq!(ReadError::CollectionParameterMissing.error_num(), 1204);
    }

    #[test]
    fn test_handle_error_mapping() {
        assert!(matches!(
            ReadError::from(HandleError::EmptyCollectionSegment("/1".into())),
            ReadError::UnnamedCollection(_)
        ));
        assert!(matches!(
            ReadError::from(HandleError::MalformedKey("x".into())),
            ReadError::MalformedHandle(_)
        ));
    }

    #[test]
    fn test_store_error_mapping() {
        assert!(matches!(
            ReadError::from(StoreError::LockPoisoned),
            ReadError::Internal(_)
        ));
        assert!(matches!(
            ReadError::from(StoreError::DocumentNotFound("c/1".into())),
            ReadError::DocumentNotFound(_)
        ));
    }
}
