//! CLI argument definitions using clap
//!
//! Commands:
//! - userbase serve [--config <path>] [--port <port>] [--env <name>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// userbase - A minimal user-directory REST service
#[derive(Parser, Debug)]
#[command(name = "userbase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the listening port
        #[arg(long)]
        port: Option<u16>,

        /// Override the runtime environment (development/test/production)
        #[arg(long)]
        env: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
