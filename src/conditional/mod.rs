//! # Conditional Requests
//!
//! Decides between serving a document, answering Not Modified, or failing
//! a precondition, from the document's current revision and the request's
//! `If-Match` / `If-None-Match` values.
//!
//! The decision is an ordered rule list. The first rule that applies wins;
//! `If-None-Match` is never consulted once `If-Match` is present.

mod evaluator;
mod headers;

pub use evaluator::{evaluate, Decision, Evaluation, Rule, RULES};
pub use headers::ConditionalHeaders;
