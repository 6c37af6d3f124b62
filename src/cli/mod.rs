//! CLI module for userbase
//!
//! Provides the command-line interface:
//! - serve: load configuration, connect the store, run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
