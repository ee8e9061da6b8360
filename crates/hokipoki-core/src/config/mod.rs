//! Adapter configuration
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. TOML file (`--config`, `./hokipoki-plugin.toml`, or the user config dir)
//! 3. Environment variables (`HOKIPOKI_PROGRAM`, `HOKIPOKI_TIMEOUT_SECS`, `HOKIPOKI_WORKING_DIR`)
//! 4. Explicit overrides (CLI flags)

mod loader;

#[cfg(test)]
mod tests;

pub use loader::{ConfigLoader, ConfigOverrides, default_search_paths};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default name of the external CLI binary
pub const DEFAULT_PROGRAM: &str = "hokipoki";

/// Default subprocess timeout (10 minutes); remote tasks can take a while
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// File name looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "hokipoki-plugin.toml";

/// Environment variable names
pub mod env {
    pub const PROGRAM: &str = "HOKIPOKI_PROGRAM";
    pub const TIMEOUT_SECS: &str = "HOKIPOKI_TIMEOUT_SECS";
    pub const WORKING_DIR: &str = "HOKIPOKI_WORKING_DIR";
}

/// Configuration errors
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Invalid configuration in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

/// Settings for running the external CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Binary name or path of the `hokipoki` CLI
    pub program: String,
    /// Subprocess timeout in seconds; 0 disables it
    pub timeout_secs: u64,
    /// Working directory for the subprocess (the repository patches land in)
    pub working_dir: Option<PathBuf>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            working_dir: None,
        }
    }
}

impl AdapterConfig {
    /// Timeout as a `Duration`, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Apply overrides on top of this config
    pub fn merge(&mut self, overrides: ConfigOverrides) {
        if let Some(program) = overrides.program.filter(|p| !p.trim().is_empty()) {
            self.program = program;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        if overrides.working_dir.is_some() {
            self.working_dir = overrides.working_dir;
        }
    }
}
