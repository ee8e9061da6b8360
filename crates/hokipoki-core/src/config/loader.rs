//! Layered configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{AdapterConfig, CONFIG_FILE_NAME, ConfigError, env};

/// Partial configuration from a higher-precedence source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub program: Option<String>,
    pub timeout_secs: Option<u64>,
    pub working_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Read overrides from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through a lookup function (environment-like)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut overrides = Self::default();

        if let Some(program) = lookup(env::PROGRAM) {
            overrides.program = Some(program);
        }

        if let Some(raw) = lookup(env::TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: env::TIMEOUT_SECS.to_string(),
                    value: raw.clone(),
                })?;
            overrides.timeout_secs = Some(secs);
        }

        if let Some(dir) = lookup(env::WORKING_DIR).filter(|d| !d.is_empty()) {
            overrides.working_dir = Some(PathBuf::from(dir));
        }

        Ok(overrides)
    }
}

/// Candidate config files, checked in order; the first existing one is used
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("hokipoki-plugin").join("config.toml"));
    }
    paths
}

/// Builds an [`AdapterConfig`] from file and overrides
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    explicit_file: Option<PathBuf>,
    search_paths: Vec<PathBuf>,
    overrides: Vec<ConfigOverrides>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            explicit_file: None,
            search_paths: default_search_paths(),
            overrides: Vec::new(),
        }
    }

    /// Use this file instead of searching; it must exist
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    /// Replace the search path list
    pub fn with_search_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.search_paths = paths;
        self
    }

    /// Add an override layer; later layers win
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides.push(overrides);
        self
    }

    /// Resolve the final configuration
    pub fn load(self) -> Result<AdapterConfig, ConfigError> {
        let mut config = match self.config_file()? {
            Some(path) => load_file(&path)?,
            None => AdapterConfig::default(),
        };

        for overrides in self.overrides {
            config.merge(overrides);
        }

        debug!(
            "Resolved config: program={}, timeout_secs={}",
            config.program, config.timeout_secs
        );
        Ok(config)
    }

    fn config_file(&self) -> Result<Option<PathBuf>, ConfigError> {
        if let Some(path) = &self.explicit_file {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.clone()));
            }
            return Ok(Some(path.clone()));
        }
        Ok(self.search_paths.iter().find(|p| p.is_file()).cloned())
    }
}

fn load_file(path: &Path) -> Result<AdapterConfig, ConfigError> {
    debug!("Loading config from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
