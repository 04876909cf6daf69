//! Command execution context
//!
//! Loads configuration once and builds the shared pieces commands need: the
//! local store, the API client, the record cache and the preferences.

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, warn};

use crate::cache::{LocalStore, MemoryStore, RecordCache, SqliteStore};
use crate::catalog::{CatalogController, LoadSettings, Preferences};
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::PokeApiClient;
use crate::config::Config;
use crate::error::{Result, StorageError};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded and validated configuration, with CLI overrides applied
    pub config: Config,
    /// PokeAPI client (Arc-wrapped for the controller)
    pub client: Arc<PokeApiClient>,
    /// Store shared by the record cache and preferences
    pub store: Arc<dyn LocalStore>,
    /// Output format preference
    pub format: OutputFormat,
    no_cache: bool,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A store that cannot be opened is replaced by an in-memory one so the
    /// command still runs; nothing is persisted in that case.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded or is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = load_config(opts)?;

        let store: Arc<dyn LocalStore> = match open_store(&config) {
            Ok(store) => {
                debug!("Using local storage at {}", store.path().display());
                Arc::new(store)
            }
            Err(e) => {
                warn!("Local storage unavailable, nothing will be saved: {}", e);
                Arc::new(MemoryStore::new())
            }
        };

        let client = Arc::new(PokeApiClient::from_config(&config)?);

        Ok(Self {
            config,
            client,
            store,
            format: opts.format,
            no_cache: opts.no_cache,
        })
    }

    /// Record cache over the shared store; disabled under `--no-cache`
    pub fn record_cache(&self) -> RecordCache {
        if self.no_cache {
            debug!("Record cache disabled for this run");
            RecordCache::disabled()
        } else {
            RecordCache::new(self.store.clone(), self.config.cache_ttl())
        }
    }

    /// Load controller with a fresh record cache
    pub fn controller(&self) -> CatalogController<PokeApiClient> {
        CatalogController::new(
            self.client.clone(),
            self.record_cache(),
            LoadSettings::from_config(&self.config),
        )
    }

    pub fn preferences(&self) -> Preferences {
        Preferences::new(self.store.clone())
    }
}

/// Load the config file and apply CLI overrides
pub fn load_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load_at(opts.config_ref())?;

    if let Some(base) = opts.api_base_ref() {
        config.api_base = base.to_string();
        config.validate()?;
    }

    Ok(config)
}

/// Directory holding the storage database
pub fn storage_dir(config: &Config) -> std::result::Result<PathBuf, StorageError> {
    config.storage_dir().ok_or(StorageError::NoCacheDir)
}

/// Open the SQLite store, reporting failures to the caller
pub fn open_store(config: &Config) -> std::result::Result<SqliteStore, StorageError> {
    SqliteStore::open_at(&storage_dir(config)?)
}
