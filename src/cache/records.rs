//! TTL cache for the loaded record collection
//!
//! Holds exactly one entry: the most recently fetched records and the time
//! they were fetched. The entry is mirrored into the local store so it
//! survives restarts; store failures are logged and otherwise ignored.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::keys;
use super::storage::LocalStore;
use crate::client::models::Pokemon;
use crate::error::StorageError;

/// Persisted cache entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: Vec<Pokemon>,
    /// Fetch time in epoch milliseconds
    pub timestamp: i64,
}

/// Record cache with a fixed time-to-live.
pub struct RecordCache {
    store: Option<Arc<dyn LocalStore>>,
    entry: Option<CacheEntry>,
    ttl: Duration,
    enabled: bool,
}

impl RecordCache {
    /// Cache mirrored into `store`
    pub fn new(store: Arc<dyn LocalStore>, ttl: Duration) -> Self {
        Self {
            store: Some(store),
            entry: None,
            ttl,
            enabled: true,
        }
    }

    /// Cache that lives only for this process
    pub fn in_memory(ttl: Duration) -> Self {
        Self {
            store: None,
            entry: None,
            ttl,
            enabled: true,
        }
    }

    /// Cache that always misses and never writes (for `--no-cache`)
    pub fn disabled() -> Self {
        Self {
            store: None,
            entry: None,
            ttl: Duration::ZERO,
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached records, if an entry exists and is younger than the TTL
    pub fn get(&self) -> Option<&[Pokemon]> {
        self.get_at(Utc::now().timestamp_millis())
    }

    fn get_at(&self, now_ms: i64) -> Option<&[Pokemon]> {
        let entry = self.entry.as_ref()?;
        let ttl_ms = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);
        if now_ms.saturating_sub(entry.timestamp) < ttl_ms {
            debug!("Cache hit ({} records)", entry.data.len());
            Some(&entry.data)
        } else {
            debug!("Cache entry expired");
            None
        }
    }

    /// Replace the entry with `records`, stamped now
    pub fn set(&mut self, records: Vec<Pokemon>) {
        self.set_at(records, Utc::now().timestamp_millis());
    }

    fn set_at(&mut self, records: Vec<Pokemon>, timestamp: i64) {
        if !self.enabled {
            return;
        }

        let entry = CacheEntry {
            data: records,
            timestamp,
        };

        if let Some(store) = &self.store {
            match serde_json::to_string(&entry) {
                Ok(json) => {
                    if let Err(e) = store.set_item(keys::RECORDS, &json) {
                        warn!("Could not save cache to local storage: {}", e);
                    }
                }
                Err(e) => warn!("Could not serialize cache entry: {}", e),
            }
        }

        debug!("Cached {} records", entry.data.len());
        self.entry = Some(entry);
    }

    /// Hydrate the in-memory entry from the local store.
    ///
    /// Returns whether an entry was loaded. Missing or malformed data is a
    /// miss; the freshness check happens in `get`.
    pub fn load_from_storage(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(store) = &self.store else {
            return false;
        };

        let raw = match store.get_item(keys::RECORDS) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(e) => {
                warn!("Could not load cache from local storage: {}", e);
                return false;
            }
        };

        match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) => {
                info!("Loaded {} cached records from local storage", entry.data.len());
                self.entry = Some(entry);
                true
            }
            Err(e) => {
                warn!("Ignoring malformed cache entry: {}", e);
                false
            }
        }
    }

    /// Drop the in-memory entry and remove the stored copy, reporting store failures
    pub fn try_clear(&mut self) -> Result<bool, StorageError> {
        let had_entry = self.entry.take().is_some();
        let removed = match &self.store {
            Some(store) => store.remove_item(keys::RECORDS)?,
            None => false,
        };
        info!("Record cache cleared");
        Ok(had_entry || removed)
    }

    /// Drop the in-memory entry and remove the stored copy
    pub fn clear(&mut self) {
        if let Err(e) = self.try_clear() {
            warn!("Could not clear cached records from local storage: {}", e);
        }
    }

    /// Number of records in the current entry, fresh or not
    pub fn len(&self) -> usize {
        self.entry.as_ref().map(|e| e.data.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// When the current entry was fetched
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        let entry = self.entry.as_ref()?;
        Utc.timestamp_millis_opt(entry.timestamp).single()
    }

    /// Age of the current entry
    pub fn age(&self) -> Option<Duration> {
        let entry = self.entry.as_ref()?;
        let elapsed = Utc::now().timestamp_millis().saturating_sub(entry.timestamp);
        Some(Duration::from_millis(u64::try_from(elapsed).unwrap_or(0)))
    }

    /// Whether `get` would currently hit
    pub fn is_fresh(&self) -> bool {
        self.get().is_some()
    }
}
