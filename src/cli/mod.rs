//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Boot the service and serve HTTP
//! - init: Write a default configuration file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
