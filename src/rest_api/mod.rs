//! # REST API Module
//!
//! HTTP endpoints for reading documents: fetch, probe and enumeration.
//! Every body is JSON with `Content-Type: application/json; charset=utf-8`.

pub mod errors;
pub mod response;
pub mod server;

pub use errors::{RestError, RestResult};
pub use response::{DocumentListResponse, Rendered, JSON_CONTENT_TYPE};
pub use server::{document_routes, unknown_path};
