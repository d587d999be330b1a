//! Handle grammar and canonical handles

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::errors::{HandleError, HandleResult};
use super::key::DocumentKey;
use crate::collection::CollectionRef;

fn handle_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]+/\d+$").expect("static handle pattern"))
}

/// A syntactically valid but unresolved handle, as the caller wrote it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentAddress {
    collection: CollectionRef,
    key: DocumentKey,
}

impl DocumentAddress {
    /// Parses `<collection>/<key>`.
    ///
    /// An empty collection segment is reported separately from every other
    /// shape error. A bare string without a separator is always malformed,
    /// even when it looks like an identifier.
    pub fn parse(raw: &str) -> HandleResult<Self> {
        if raw.starts_with('/') {
            return Err(HandleError::EmptyCollectionSegment(raw.to_string()));
        }
        if !handle_pattern().is_match(raw) {
            return Err(HandleError::Malformed(raw.to_string()));
        }

        let (collection, key) = raw
            .split_once('/')
            .ok_or_else(|| HandleError::Malformed(raw.to_string()))?;

        Ok(Self {
            collection: CollectionRef::parse(collection),
            key: DocumentKey::parse(key)?,
        })
    }

    #[inline]
    pub fn collection(&self) -> &CollectionRef {
        &self.collection
    }

    #[inline]
    pub fn key(&self) -> &DocumentKey {
        &self.key
    }
}

impl fmt::Display for DocumentAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.key)
    }
}

/// A canonical handle: always rendered with the collection name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DocumentHandle {
    collection_name: String,
    key: DocumentKey,
}

impl DocumentHandle {
    pub fn new(collection_name: impl Into<String>, key: DocumentKey) -> Self {
        Self {
            collection_name: collection_name.into(),
            key,
        }
    }

    #[inline]
    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    #[inline]
    pub fn key(&self) -> &DocumentKey {
        &self.key
    }

    /// URL path of the document below the given API root.
    pub fn path(&self, api_root: &str) -> String {
        format!("{}/document/{}/{}", api_root, self.collection_name, self.key)
    }
}

impl fmt::Display for DocumentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection_name, self.key)
    }
}
