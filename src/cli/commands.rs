//! CLI command implementations
//!
//! `serve` loads configuration, constructs the store client, and runs
//! the HTTP server on a fresh tokio runtime. The store is owned here
//! and injected into the router; nothing else holds process-wide state.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, Environment};
use crate::rest_api::{self, AppState};
use crate::store::InMemoryUserStore;

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    init_tracing();

    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { config, port, env } => serve(config.as_deref(), port, env.as_deref()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Boot the server: config, store, runtime, serve loop.
fn serve(config_path: Option<&std::path::Path>, port: Option<u16>, env: Option<&str>) -> CliResult<()> {
    let mut config = match config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::from_env()?,
    };
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(name) = env {
        config.env = Environment::parse(name)?;
    }

    let store = Arc::new(InMemoryUserStore::connect(config.database()));
    let state = AppState::new(store);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(rest_api::serve(&config, state))?;
    Ok(())
}
