//! RevisionStore - read-side facade over directory and engine

use std::sync::Arc;

use serde_json::Value;

use super::document::VersionedDocument;
use super::engine::StorageEngine;
use super::errors::{StoreError, StoreResult};
use super::Revision;
use crate::collection::{Collection, CollectionDirectory, CollectionRef};
use crate::handle::{DocumentHandle, DocumentKey};

/// A document observed at its current revision.
#[derive(Clone, Debug)]
pub struct CurrentDocument {
    handle: DocumentHandle,
    document: Arc<VersionedDocument>,
}

impl CurrentDocument {
    /// Canonical handle (collection name, never the identifier).
    #[inline]
    pub fn handle(&self) -> &DocumentHandle {
        &self.handle
    }

    #[inline]
    pub fn key(&self) -> &DocumentKey {
        self.document.key()
    }

    #[inline]
    pub fn revision(&self) -> Revision {
        self.document.revision()
    }

    pub fn etag(&self) -> String {
        self.document.revision().etag()
    }

    pub fn to_json(&self) -> Value {
        self.document.to_json(&self.handle)
    }
}

/// One-shot listing of the handles of a collection.
///
/// Reflects the live document set when the listing was taken. Not a
/// snapshot isolated from later writes.
#[derive(Debug)]
pub struct HandleListing {
    collection: Arc<Collection>,
    keys: std::vec::IntoIter<DocumentKey>,
}

impl HandleListing {
    /// The resolved collection being listed.
    pub fn collection(&self) -> &Collection {
        &self.collection
    }
}

impl Iterator for HandleListing {
    type Item = DocumentHandle;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys
            .next()
            .map(|key| DocumentHandle::new(self.collection.name(), key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl ExactSizeIterator for HandleListing {}

/// Current-revision lookups against the collection directory and the
/// storage engine.
pub struct RevisionStore {
    directory: Arc<dyn CollectionDirectory>,
    engine: Arc<dyn StorageEngine>,
}

impl RevisionStore {
    pub fn new(directory: Arc<dyn CollectionDirectory>, engine: Arc<dyn StorageEngine>) -> Self {
        Self { directory, engine }
    }

    /// Resolves a name or identifier to the collection.
    pub fn resolve_collection(&self, reference: &CollectionRef) -> StoreResult<Arc<Collection>> {
        Ok(self.directory.resolve(reference)?)
    }

    /// Current document and revision for `(collection, key)`.
    pub fn current_revision(
        &self,
        reference: &CollectionRef,
        key: &DocumentKey,
    ) -> StoreResult<CurrentDocument> {
        let collection = self.resolve_collection(reference)?;
        self.current_in(&collection, key)
            .map_err(|err| match err {
                StoreError::DocumentNotFound(_) => {
                    StoreError::DocumentNotFound(format!("{}/{}", reference, key))
                }
                other => other,
            })
    }

    /// Current document within an already resolved collection.
    pub fn current_in(
        &self,
        collection: &Collection,
        key: &DocumentKey,
    ) -> StoreResult<CurrentDocument> {
        let document = self
            .engine
            .get(collection.id(), key)?
            .ok_or_else(|| StoreError::DocumentNotFound(format!("{}/{}", collection.name(), key)))?;

        Ok(CurrentDocument {
            handle: DocumentHandle::new(collection.name(), key.clone()),
            document,
        })
    }

    /// Handles of all live documents in a collection.
    pub fn all_handles(&self, reference: &CollectionRef) -> StoreResult<HandleListing> {
        let collection = self.resolve_collection(reference)?;
        let keys = self.engine.list_keys(collection.id())?;

        Ok(HandleListing {
            collection,
            keys: keys.into_iter(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::InMemoryCollectionDirectory;
    use crate::revision::InMemoryStorageEngine;
    use crate::tick::TickGenerator;
    use serde_json::json;

    struct Fixture {
        store: RevisionStore,
        directory: Arc<InMemoryCollectionDirectory>,
        engine: Arc<InMemoryStorageEngine>,
    }

    fn fixture() -> Fixture {
        let ticks = Arc::new(TickGenerator::new());
        let directory = Arc::new(InMemoryCollectionDirectory::new(Arc::clone(&ticks)));
        let engine = Arc::new(InMemoryStorageEngine::new(ticks));
        let store = RevisionStore::new(directory.clone(), engine.clone());
        Fixture {
            store,
            directory,
            engine,
        }
    }

    #[test]
    fn test_current_revision_by_name_and_id() {
        let f = fixture();
        let coll = f.directory.create("C").unwrap();
        let doc = f.engine.insert(coll.id(), json!({"Hallo": "World"})).unwrap();

        let by_name = f
            .store
            .current_revision(&CollectionRef::ByName("C".to_string()), doc.key())
            .unwrap();
        let by_id = f
            .store
            .current_revision(&CollectionRef::ById(coll.id()), doc.key())
            .unwrap();

        assert_eq!(by_name.revision(), by_id.revision());
        assert_eq!(by_id.handle().to_string(), format!("C/{}", doc.key()));
        assert_eq!(by_id.to_json()["_id"], format!("C/{}", doc.key()));
    }

    #[test]
    fn test_missing_collection_and_document() {
        let f = fixture();
        let coll = f.directory.create("C").unwrap();
        let key = DocumentKey::parse("234567").unwrap();

        assert!(matches!(
            f.store.current_revision(&CollectionRef::parse("123456"), &key),
            Err(StoreError::CollectionNotFound(_))
        ));
        assert_eq!(
            f.store
                .current_revision(&CollectionRef::ById(coll.id()), &key)
                .unwrap_err(),
            StoreError::DocumentNotFound(format!("{}/234567", coll.id()))
        );
    }

    #[test]
    fn test_all_handles_use_collection_name() {
        let f = fixture();
        let coll = f.directory.create("UnitTestsCollectionAll").unwrap();
        for i in 0..3 {
            f.engine.insert(coll.id(), json!({"i": i})).unwrap();
        }

        let listing = f.store.all_handles(&CollectionRef::ById(coll.id())).unwrap();
        assert_eq!(listing.len(), 3);
        assert_eq!(listing.collection().name(), "UnitTestsCollectionAll");
        for handle in listing {
            assert_eq!(handle.collection_name(), "UnitTestsCollectionAll");
        }
    }

    #[test]
    fn test_all_handles_empty_collection() {
        let f = fixture();
        f.directory.create("empty").unwrap();

        let listing = f
            .store
            .all_handles(&CollectionRef::ByName("empty".to_string()))
            .unwrap();
        assert_eq!(listing.count(), 0);
    }
}
