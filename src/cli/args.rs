//! CLI argument definitions using clap
//!
//! Commands:
//! - docread serve --config <path> [--port <port>]
//! - docread check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docread - read path of a revisioned document store
#[derive(Parser, Debug)]
#[command(name = "docread")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the configured collections and serve the read API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./docread.json")]
        config: PathBuf,

        /// Override `server.port` from the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate a configuration file, then exit
    CheckConfig {
        /// Path to configuration file
        #[arg(long, default_value = "./docread.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["docread", "serve", "--config", "x.json", "--port", "9000"])
            .unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(config, PathBuf::from("x.json"));
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_check_config_default_path() {
        let cli = Cli::try_parse_from(["docread", "check-config"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::CheckConfig { config } if config == PathBuf::from("./docread.json")
        ));
    }
}
