//! docread - read path of a revisioned document store
//!
//! Documents are addressed by handle (`<collection>/<key>`), served with
//! their current revision as an entity tag, and honour `If-Match` /
//! `If-None-Match`. Collections may be addressed by name or numeric id.

pub mod cli;
pub mod collection;
pub mod conditional;
pub mod handle;
pub mod http_server;
pub mod observability;
pub mod read_service;
pub mod rest_api;
pub mod revision;
pub mod tick;
