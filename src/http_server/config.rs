//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, API root and
//! CORS settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected server configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerConfigError {
    #[error("api_root must start with '/' and must not end with '/': '{0}'")]
    InvalidApiRoot(String),

    #[error("host must not be empty")]
    EmptyHost,

    #[error("port must be > 0")]
    InvalidPort,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8529)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Prefix of every document path (default: "/_api")
    #[serde(default = "default_api_root")]
    pub api_root: String,

    /// CORS allowed origins. Empty means any origin.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8529
}

fn default_api_root() -> String {
    "/_api".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_root: default_api_root(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<(), ServerConfigError> {
        if self.host.trim().is_empty() {
            return Err(ServerConfigError::EmptyHost);
        }
        if self.port == 0 {
            return Err(ServerConfigError::InvalidPort);
        }
        if !self.api_root.starts_with('/') || self.api_root.ends_with('/') {
            return Err(ServerConfigError::InvalidApiRoot(self.api_root.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8529);
        assert_eq!(config.api_root, "/_api");
        assert!(!config.cors_origins.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = HttpServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_api_root_validation() {
        for bad in ["", "/", "_api", "/_api/"] {
            let config = HttpServerConfig {
                api_root: bad.to_string(),
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ServerConfigError::InvalidApiRoot(bad.to_string()))
            );
        }

        let nested = HttpServerConfig {
            api_root: "/db/_system/_api".to_string(),
            ..Default::default()
        };
        assert!(nested.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: HttpServerConfig = serde_json::from_str(r#"{"port": 9000}"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.api_root, "/_api");
    }

    #[test]
    fn test_zero_port_rejected() {
        assert_eq!(
            HttpServerConfig::with_port(0).validate(),
            Err(ServerConfigError::InvalidPort)
        );
    }
}
