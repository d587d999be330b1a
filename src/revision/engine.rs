//! # Storage Engine
//!
//! The storage collaborator interface and an in-memory engine.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;

use super::document::VersionedDocument;
use super::errors::{StoreError, StoreResult};
use super::Revision;
use crate::collection::CollectionId;
use crate::handle::DocumentKey;
use crate::tick::TickGenerator;

/// Storage collaborator consumed by the read path.
pub trait StorageEngine: Send + Sync {
    /// Current version of a document, if it exists.
    fn get(
        &self,
        collection: CollectionId,
        key: &DocumentKey,
    ) -> StoreResult<Option<Arc<VersionedDocument>>>;

    /// Keys of all live documents at call time. No duplicates.
    fn list_keys(&self, collection: CollectionId) -> StoreResult<Vec<DocumentKey>>;
}

type DocumentMap = HashMap<DocumentKey, Arc<VersionedDocument>>;

/// In-memory storage engine.
///
/// Also carries the write operations (insert, replace, remove) that
/// populate the store; the HTTP surface never calls them.
pub struct InMemoryStorageEngine {
    ticks: Arc<TickGenerator>,
    collections: RwLock<HashMap<CollectionId, DocumentMap>>,
}

impl InMemoryStorageEngine {
    pub fn new(ticks: Arc<TickGenerator>) -> Self {
        Self {
            ticks,
            collections: RwLock::new(HashMap::new()),
        }
    }

    fn object_body(body: Value) -> StoreResult<serde_json::Map<String, Value>> {
        match body {
            Value::Object(map) => Ok(map),
            _ => Err(StoreError::InvalidBody),
        }
    }

    fn not_found(collection: CollectionId, key: &DocumentKey) -> StoreError {
        StoreError::DocumentNotFound(format!("{}/{}", collection, key))
    }

    /// Creates a document. The new key and initial revision share one tick.
    pub fn insert(
        &self,
        collection: CollectionId,
        body: Value,
    ) -> StoreResult<Arc<VersionedDocument>> {
        let body = Self::object_body(body)?;
        let mut collections = self.collections.write().map_err(|_| StoreError::LockPoisoned)?;

        let tick = self.ticks.next();
        let document = Arc::new(VersionedDocument::new(
            DocumentKey::from_tick(tick),
            Revision::new(tick),
            body,
        ));

        collections
            .entry(collection)
            .or_default()
            .insert(document.key().clone(), Arc::clone(&document));

        Ok(document)
    }

    /// Replaces the body of an existing document under a new revision.
    pub fn replace(
        &self,
        collection: CollectionId,
        key: &DocumentKey,
        body: Value,
    ) -> StoreResult<Arc<VersionedDocument>> {
        let body = Self::object_body(body)?;
        let mut collections = self.collections.write().map_err(|_| StoreError::LockPoisoned)?;

        let slot = collections
            .get_mut(&collection)
            .and_then(|docs| docs.get_mut(key))
            .ok_or_else(|| Self::not_found(collection, key))?;

        let document = Arc::new(VersionedDocument::new(
            key.clone(),
            Revision::new(self.ticks.next()),
            body,
        ));
        *slot = Arc::clone(&document);

        Ok(document)
    }

    /// Removes a document and returns its last version.
    pub fn remove(
        &self,
        collection: CollectionId,
        key: &DocumentKey,
    ) -> StoreResult<Arc<VersionedDocument>> {
        let mut collections = self.collections.write().map_err(|_| StoreError::LockPoisoned)?;

        collections
            .get_mut(&collection)
            .and_then(|docs| docs.remove(key))
            .ok_or_else(|| Self::not_found(collection, key))
    }

    /// Number of live documents in a collection.
    pub fn count(&self, collection: CollectionId) -> StoreResult<usize> {
        let collections = self.collections.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(collections.get(&collection).map_or(0, HashMap::len))
    }
}

impl StorageEngine for InMemoryStorageEngine {
    fn get(
        &self,
        collection: CollectionId,
        key: &DocumentKey,
    ) -> StoreResult<Option<Arc<VersionedDocument>>> {
        let collections = self.collections.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.get(key))
            .cloned())
    }

    fn list_keys(&self, collection: CollectionId) -> StoreResult<Vec<DocumentKey>> {
        let collections = self.collections.read().map_err(|_| StoreError::LockPoisoned)?;

        let mut keys: Vec<_> = collections
            .get(&collection)
            .map(|docs| docs.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort_by(|a, b| {
            a.as_str()
                .len()
                .cmp(&b.as_str().len())
                .then_with(|| a.cmp(b))
        });
        Ok(keys)
    }
}
