//! Revision - current content state of a document
//!
//! A revision is rendered as a decimal string in `_rev` and as the quoted
//! form of that string in the `ETag` header.

use std::fmt;

/// Revision of a document.
///
/// Every successful mutation assigns a new, larger revision. Two reads of
/// an unmodified document observe the same revision.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Revision(u64);

impl Revision {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Quoted entity tag, e.g. `"34"`.
    pub fn etag(&self) -> String {
        format!("\"{}\"", self.0)
    }

    /// Compares a conditional header value against this revision's tag.
    ///
    /// Surrounding whitespace is ignored. The comparison is on the quoted
    /// form, so an unquoted `34` does not match `"34"`.
    pub fn matches_tag(&self, tag: &str) -> bool {
        tag.trim() == self.etag()
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
