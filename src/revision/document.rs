//! VersionedDocument - immutable body + revision
//!
//! Once created, never changes. A mutation publishes a new value.

use serde_json::{Map, Value};

use super::Revision;
use crate::handle::{DocumentHandle, DocumentKey};

/// System attribute names. They are never stored in the body.
pub const ID_ATTRIBUTE: &str = "_id";
pub const KEY_ATTRIBUTE: &str = "_key";
pub const REV_ATTRIBUTE: &str = "_rev";

/// The current state of one document.
///
/// All fields are private to keep the body and revision paired.
#[derive(Clone, Debug, PartialEq)]
pub struct VersionedDocument {
    key: DocumentKey,
    revision: Revision,
    body: Map<String, Value>,
}

impl VersionedDocument {
    /// Creates a version. System attributes in `body` are dropped.
    pub fn new(key: DocumentKey, revision: Revision, mut body: Map<String, Value>) -> Self {
        body.remove(ID_ATTRIBUTE);
        body.remove(KEY_ATTRIBUTE);
        body.remove(REV_ATTRIBUTE);
        Self {
            key,
            revision,
            body,
        }
    }

    #[inline]
    pub fn key(&self) -> &DocumentKey {
        &self.key
    }

    #[inline]
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// User attributes only.
    #[inline]
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Full JSON representation including `_id`, `_key` and `_rev`.
    pub fn to_json(&self, handle: &DocumentHandle) -> Value {
        let mut object = self.body.clone();
        object.insert(ID_ATTRIBUTE.to_string(), Value::String(handle.to_string()));
        object.insert(KEY_ATTRIBUTE.to_string(), Value::String(self.key.to_string()));
        object.insert(REV_ATTRIBUTE.to_string(), Value::String(self.revision.to_string()));
        Value::Object(object)
    }
}
