//! CLI module for docread
//!
//! Provides command-line interface for:
//! - serve: Create configured collections and serve the read API
//! - check-config: Validate a configuration file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{boot, check_config, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
