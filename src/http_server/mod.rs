//! # HTTP Server Module
//!
//! Combines the document and observability routers into one Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `<api-root>/document/*` - Document reads
//! - `<api-root>/metrics` - Read path counters

pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::{HttpServerConfig, ServerConfigError};
pub use server::HttpServer;
