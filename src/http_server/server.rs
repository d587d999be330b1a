//! # HTTP Server
//!
//! Main HTTP server combining the document and observability routers.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::read_service::ReadService;
use crate::rest_api::{document_routes, unknown_path};

/// HTTP server for the document read API
pub struct HttpServer {
    config: HttpServerConfig,
    service: Arc<ReadService>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, service: Arc<ReadService>) -> Self {
        let router = Self::build_router(&config, Arc::clone(&service));
        Self {
            config,
            service,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, service: Arc<ReadService>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let api = document_routes(Arc::clone(&service)).merge(observability_routes(service));

        Router::new()
            // Health check at root level
            .merge(health_routes())
            .nest(&config.api_root, api)
            .fallback(unknown_path)
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        log_event_with_fields(
            Event::Serving,
            &[("addr", &addr), ("api_root", &self.config.api_root)],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event_with_fields(
            Event::ShutdownComplete,
            &[("metrics", &self.service.metrics().to_json())],
        );
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        Logger::warn("SIGNAL_HANDLER_FAILED", &[("error", &e.to_string())]);
        std::future::pending::<()>().await;
    }
}
