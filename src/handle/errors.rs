//! # Handle Errors
//!
//! Syntax-level failures. None of these ever reach storage.

use thiserror::Error;

/// Result type for handle parsing
pub type HandleResult<T> = Result<T, HandleError>;

/// Handle syntax errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandleError {
    /// The collection segment before the separator is empty (`/123`).
    #[error("collection identifier missing in document handle '{0}'")]
    EmptyCollectionSegment(String),

    /// Anything else that does not match the handle grammar.
    #[error("illegal document handle '{0}'")]
    Malformed(String),

    /// Key is not a non-empty string of decimal digits.
    #[error("illegal document key '{0}'")]
    MalformedKey(String),
}
