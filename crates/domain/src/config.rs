//! Configuration structures.
//!
//! Loaded by `wayfest-infra::config` from environment variables or a
//! JSON/TOML file.

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Settings for the scheduling API endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the scheduling server (e.g. `http://localhost:5000`).
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber` env-filter directive (e.g. `wayfest=debug`).
    pub filter: String,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: "http://localhost:5000".to_string(), timeout_secs: default_timeout_secs() }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { filter: "info".to_string() }
    }
}
