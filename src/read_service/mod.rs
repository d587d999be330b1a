//! # Read Service
//!
//! Orchestrates handle resolution, revision lookup and conditional
//! evaluation for the three read modes:
//!
//! - fetch-by-handle
//! - existence probe
//! - collection enumeration
//!
//! Per request: `Start -> HandleParsed -> {Rejected | CollectionResolved}
//! -> {CollectionMissing | DocumentLookup} -> {DocumentMissing |
//! ConditionalEvaluated} -> {Served200 | Served304 | Served412}`.
//! Every failure is terminal; nothing is retried here.

mod errors;
mod service;

pub use errors::{error_num, ReadError, ReadResult};
pub use service::{FetchOutcome, ReadService};
