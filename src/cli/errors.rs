//! CLI-specific error types
//!
//! Every CLI error is fatal: it is printed to stderr by `main` and the
//! process exits non-zero.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Server failed to bind or serve
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}
