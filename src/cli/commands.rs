//! CLI command implementations
//!
//! Boot sequence for `serve`:
//! 1. Load and validate configuration
//! 2. Apply the log level
//! 3. Create the configured collections
//! 4. Start the HTTP server

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::collection::InMemoryCollectionDirectory;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{
    log_event, log_event_with_fields, Event, Logger, MetricsRegistry, Severity,
};
use crate::read_service::ReadService;
use crate::revision::{InMemoryStorageEngine, RevisionStore};
use crate::tick::TickGenerator;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Collections created at boot
    #[serde(default)]
    pub collections: Vec<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            log_level: default_log_level(),
            collections: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        self.server
            .validate()
            .map_err(|e| CliError::config_error(format!("Invalid server config: {}", e)))?;

        self.severity()?;

        let mut seen = HashSet::new();
        for name in &self.collections {
            InMemoryCollectionDirectory::validate_name(name)
                .map_err(|e| CliError::config_error(e.to_string()))?;
            if !seen.insert(name.as_str()) {
                return Err(CliError::config_error(format!(
                    "Collection '{}' listed more than once",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Parsed `log_level`.
    pub fn severity(&self) -> CliResult<Severity> {
        match self.log_level.parse::<Severity>() {
            Ok(Severity::Fatal) | Err(_) => Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error.",
                self.log_level
            ))),
            Ok(severity) => Ok(severity),
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Load, validate and summarize a configuration file on stdout.
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let summary = json!({
        "status": "ok",
        "listen": config.server.socket_addr(),
        "api_root": config.server.api_root,
        "log_level": config.log_level,
        "collections": config.collections,
    });
    println!("{}", serde_json::to_string(&summary)?);

    Ok(())
}

/// Build the read service and create every configured collection.
pub fn boot(config: &Config) -> CliResult<Arc<ReadService>> {
    let ticks = Arc::new(TickGenerator::new());
    let directory = Arc::new(InMemoryCollectionDirectory::new(Arc::clone(&ticks)));
    let engine = Arc::new(InMemoryStorageEngine::new(ticks));

    for name in &config.collections {
        let collection = directory
            .create(name)
            .map_err(|e| CliError::boot_failed(format!("Failed to create collection: {}", e)))?;
        log_event_with_fields(
            Event::CollectionCreated,
            &[("name", collection.name()), ("id", &collection.id().to_string())],
        );
    }

    let store = Arc::new(RevisionStore::new(directory, engine));
    Ok(Arc::new(ReadService::new(
        store,
        Arc::new(MetricsRegistry::new()),
        config.server.api_root.clone(),
    )))
}

/// Boot and serve until interrupted.
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let result = load_for_serve(config_path, port).and_then(|config| {
        let service = boot(&config)?;
        Ok((config, service))
    });

    let (config, service) = match result {
        Ok(booted) => booted,
        Err(e) => {
            log_event_with_fields(Event::BootFailed, &[("error", &e.to_string())]);
            return Err(e);
        }
    };

    log_event_with_fields(
        Event::BootComplete,
        &[("collections", &config.collections.len().to_string())],
    );

    let server = HttpServer::with_config(config.server, service);

    // Start the async runtime and run the server
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

fn load_for_serve(config_path: &Path, port: Option<u16>) -> CliResult<Config> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
        config.validate()?;
    }

    Logger::set_min_severity(config.severity()?);
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("path", &config_path.display().to_string())],
    );

    Ok(config)
}
