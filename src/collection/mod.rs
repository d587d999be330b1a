//! # Collections
//!
//! A collection is addressed either by its numeric identifier or by its
//! name. Both forms resolve through one [`CollectionDirectory`] to the
//! same [`Collection`].
//!
//! - `CollectionId` - stable numeric identifier
//! - `CollectionRef` - tagged union of the two addressing forms
//! - `CollectionDirectory` - name/identifier resolution

mod directory;
mod errors;
mod reference;

pub use directory::{Collection, CollectionDirectory, InMemoryCollectionDirectory};
pub use errors::{DirectoryError, DirectoryResult};
pub use reference::{CollectionId, CollectionRef};
