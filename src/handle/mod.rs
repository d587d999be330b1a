//! # Document Handles
//!
//! A handle is the `<collection>/<key>` address of a document. This module
//! owns the handle grammar and the resolver that turns a raw handle into a
//! live document reference.
//!
//! Resolution is ordered: syntax is checked first and never touches
//! storage, then the collection is resolved, then the key is looked up.

mod address;
mod errors;
mod key;
mod resolver;

pub use address::{DocumentAddress, DocumentHandle};
pub use errors::{HandleError, HandleResult};
pub use key::DocumentKey;
pub use resolver::HandleResolver;
