//! Application configuration
//!
//! Static configuration external to the core: the runtime environment,
//! the listening address, and the per-environment store namespace.
//! Values come from an optional JSON file with serde-supplied defaults;
//! `APP_ENV` and `PORT` environment variables override the file.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown environment: {0:?}")]
    UnknownEnvironment(String),
}

/// Runtime environment selecting the store namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    /// Parse an environment name as used in `APP_ENV`.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name {
            "development" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }

    /// String form as it appears in config and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Runtime environment (default: development)
    #[serde(default)]
    pub env: Environment,

    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Store namespace per environment
    #[serde(default = "default_databases")]
    pub databases: HashMap<String, String>,

    /// CORS allowed origins (default: none, permissive in development)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_databases() -> HashMap<String, String> {
    [
        ("development", "userbase_dev"),
        ("test", "userbase_test"),
        ("production", "userbase"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: Environment::default(),
            host: default_host(),
            port: default_port(),
            databases: default_databases(),
            cors_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file, then apply `APP_ENV` and
    /// `PORT` overrides from the process environment.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&raw)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Defaults plus process-environment overrides; used when no config
    /// file is given.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(name) = std::env::var("APP_ENV") {
            self.env = Environment::parse(&name)?;
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.port = port;
            }
        }
        Ok(())
    }

    /// Store namespace selected by the current environment.
    pub fn database(&self) -> &str {
        self.databases
            .get(self.env.as_str())
            .map(String::as_str)
            .unwrap_or("userbase")
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
