//! Configuration management for pokedex

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Default PokeAPI base URL
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the PokeAPI service
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Number of records fetched on the initial load
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Number of records fetched per load-more round
    #[serde(default = "default_load_more_size")]
    pub load_more_size: usize,

    /// Record cache lifetime in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Maximum detail requests in flight during a batch fetch
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,

    /// Client-side request pacing
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,

    /// Directory holding the local storage database (defaults to the XDG cache dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_page_size() -> usize {
    20
}

fn default_load_more_size() -> usize {
    10
}

fn default_cache_ttl_secs() -> u64 {
    crate::cache::CacheTtl::RECORDS.as_secs()
}

fn default_max_concurrent() -> usize {
    20
}

fn default_requests_per_second() -> u32 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            page_size: default_page_size(),
            load_more_size: default_load_more_size(),
            cache_ttl_secs: default_cache_ttl_secs(),
            max_concurrent: default_max_concurrent(),
            requests_per_second: default_requests_per_second(),
            storage_dir: None,
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".pokedex").join("config.yaml"))
    }

    /// Resolve an optional override into a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from an optional path, falling back to defaults when
    /// no file exists.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        match Self::load_from(&path) {
            Ok(config) => Ok(config),
            Err(crate::error::Error::Config(ConfigError::NotFound)) => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Reject settings the loader cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be positive".to_string()).into());
        }
        if self.load_more_size == 0 {
            return Err(
                ConfigError::Invalid("load_more_size must be positive".to_string()).into(),
            );
        }
        if self.load_more_size > self.page_size {
            return Err(ConfigError::Invalid(format!(
                "load_more_size ({}) must not exceed page_size ({})",
                self.load_more_size, self.page_size
            ))
            .into());
        }
        if self.max_concurrent == 0 {
            return Err(
                ConfigError::Invalid("max_concurrent must be positive".to_string()).into(),
            );
        }
        if self.requests_per_second == 0 {
            return Err(
                ConfigError::Invalid("requests_per_second must be positive".to_string()).into(),
            );
        }
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::Invalid("api_base must not be empty".to_string()).into());
        }
        Ok(())
    }

    /// Record cache lifetime
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Directory for the local storage database
    pub fn storage_dir(&self) -> Option<PathBuf> {
        self.storage_dir
            .clone()
            .or_else(crate::cache::storage::default_storage_dir)
    }
}
