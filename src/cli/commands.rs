//! CLI command implementations
//!
//! `serve` boots in order: configuration, logging, runtime, database pool,
//! HTTP listener. Any failure aborts the boot.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::companies::{CompanyService, PgCompanyStore};
use crate::config::Config;
use crate::http_server::HttpServer;
use crate::observability;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config } => serve(config.as_deref()),
        Command::Init { config } => init(&config),
    }
}

/// Write a default config file; refuses to overwrite
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized(config_path.display()));
    }

    let body = serde_json::to_string_pretty(&Config::default())?;
    fs::write(config_path, body + "\n")?;
    Ok(())
}

/// Boot the service and serve until shutdown
pub fn serve(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::resolve(config_path)?;

    observability::init_logging(config.log_format)
        .map_err(|e| CliError::boot_failed(e.to_string()))?;
    tracing::info!(
        addr = %config.http.socket_addr(),
        pool_size = config.database.max_connections,
        "configuration loaded"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::boot_failed(format!("failed to start runtime: {}", e)))?;

    runtime.block_on(async move {
        let store = PgCompanyStore::connect(&config.database)
            .await
            .map_err(|e| CliError::boot_failed(format!("failed to connect to database: {}", e)))?;

        let service = Arc::new(CompanyService::new(store));
        HttpServer::with_config(config.http, service)
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}
