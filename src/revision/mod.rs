//! Revision Store
//!
//! Maps `(collection, key)` to the current document and its current
//! revision. Only the current revision is kept; no history is needed to
//! serve reads.
//!
//! This module provides:
//! - `Revision` - monotonically assigned revision of a document
//! - `VersionedDocument` - immutable body + revision unit
//! - `StorageEngine` - the storage collaborator interface
//! - `InMemoryStorageEngine` - reference engine, including the write path
//! - `RevisionStore` - read-side facade over directory + engine
//!
//! # Consistency
//!
//! A document's body and revision are published together as one
//! `Arc<VersionedDocument>`. A reader holds either the old or the new
//! value, never a mix of both.

mod document;
mod engine;
mod errors;
mod revision_id;
mod store;

pub use document::{VersionedDocument, ID_ATTRIBUTE, KEY_ATTRIBUTE, REV_ATTRIBUTE};
pub use engine::{InMemoryStorageEngine, StorageEngine};
pub use errors::{StoreError, StoreResult};
pub use revision_id::Revision;
pub use store::{CurrentDocument, HandleListing, RevisionStore};
