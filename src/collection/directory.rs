//! # Collection Directory
//!
//! Resolves name and identifier references to collections.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use regex::Regex;

use super::errors::{DirectoryError, DirectoryResult};
use super::reference::{CollectionId, CollectionRef};
use crate::tick::TickGenerator;

/// Maximum length of a collection name
pub const MAX_NAME_LENGTH: usize = 64;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_-]*$").expect("static name pattern"))
}

/// A resolved collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collection {
    id: CollectionId,
    name: String,
}

impl Collection {
    pub fn new(id: CollectionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    #[inline]
    pub fn id(&self) -> CollectionId {
        self.id
    }

    /// Canonical name, used whenever handles are rendered.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Name/identifier resolution for collections.
pub trait CollectionDirectory: Send + Sync {
    /// Resolves either addressing form to the collection.
    fn resolve(&self, reference: &CollectionRef) -> DirectoryResult<Arc<Collection>>;
}

#[derive(Default)]
struct DirectoryInner {
    by_id: HashMap<CollectionId, Arc<Collection>>,
    by_name: HashMap<String, CollectionId>,
}

/// In-memory collection directory.
///
/// Collection creation lives here because the read path needs collections
/// to exist; it is not exposed over HTTP.
pub struct InMemoryCollectionDirectory {
    ticks: Arc<TickGenerator>,
    inner: RwLock<DirectoryInner>,
}

impl InMemoryCollectionDirectory {
    pub fn new(ticks: Arc<TickGenerator>) -> Self {
        Self {
            ticks,
            inner: RwLock::new(DirectoryInner::default()),
        }
    }

    /// Checks a collection name against the naming rules.
    pub fn validate_name(name: &str) -> DirectoryResult<()> {
        if name.len() > MAX_NAME_LENGTH || !name_pattern().is_match(name) {
            return Err(DirectoryError::IllegalName(name.to_string()));
        }
        Ok(())
    }

    /// Creates a collection and assigns it a fresh identifier.
    pub fn create(&self, name: &str) -> DirectoryResult<Arc<Collection>> {
        Self::validate_name(name)?;

        let mut inner = self.inner.write().map_err(|_| DirectoryError::LockPoisoned)?;
        if inner.by_name.contains_key(name) {
            return Err(DirectoryError::DuplicateName(name.to_string()));
        }

        let id = CollectionId::new(self.ticks.next());
        let collection = Arc::new(Collection::new(id, name));
        inner.by_name.insert(name.to_string(), id);
        inner.by_id.insert(id, Arc::clone(&collection));

        Ok(collection)
    }

    fn lookup_id(inner: &DirectoryInner, reference: &CollectionRef) -> Option<CollectionId> {
        match reference {
            CollectionRef::ById(id) => inner.by_id.contains_key(id).then_some(*id),
            CollectionRef::ByName(name) => inner.by_name.get(name).copied(),
        }
    }
}

impl CollectionDirectory for InMemoryCollectionDirectory {
    fn resolve(&self, reference: &CollectionRef) -> DirectoryResult<Arc<Collection>> {
        let inner = self.inner.read().map_err(|_| DirectoryError::LockPoisoned)?;

        Self::lookup_id(&inner, reference)
            .and_then(|id| inner.by_id.get(&id).cloned())
            .ok_or_else(|| DirectoryError::CollectionNotFound(reference.to_string()))
    }
}
