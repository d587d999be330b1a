//! # Handle Resolver
//!
//! Turns a raw `<collection>/<key>` string into the current document.
//!
//! | condition                                   | result                 |
//! |---------------------------------------------|------------------------|
//! | empty collection segment                    | `UnnamedCollection`    |
//! | any other shape error                       | `MalformedHandle`      |
//! | collection does not resolve                 | `CollectionNotFound`   |
//! | collection resolves, key absent             | `DocumentNotFound`     |
//! | collection resolves, key present            | the current document   |

use std::sync::Arc;

use super::address::DocumentAddress;
use crate::read_service::ReadResult;
use crate::revision::{CurrentDocument, RevisionStore};

/// Validates handles and looks them up in the revision store.
#[derive(Clone)]
pub struct HandleResolver {
    store: Arc<RevisionStore>,
}

impl HandleResolver {
    pub fn new(store: Arc<RevisionStore>) -> Self {
        Self { store }
    }

    /// Syntax check only. Never touches storage.
    pub fn parse(&self, raw: &str) -> ReadResult<DocumentAddress> {
        Ok(DocumentAddress::parse(raw)?)
    }

    /// Full resolution down to the current document.
    pub fn resolve(&self, raw: &str) -> ReadResult<CurrentDocument> {
        let address = self.parse(raw)?;
        Ok(self
            .store
            .current_revision(address.collection(), address.key())?)
    }
}
