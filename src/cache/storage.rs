//! Durable key-value storage
//!
//! String keys map to string values, the way a browser's local storage does.
//! `SqliteStore` persists to a single SQLite file; `MemoryStore` backs tests
//! and `--no-cache` sessions.

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StorageError;

/// Schema version - increment to trigger nuke-and-rebuild
const SCHEMA_VERSION: i32 = 1;

/// Database file name inside the storage directory
pub const DB_FILE: &str = "storage.db";

type Result<T> = std::result::Result<T, StorageError>;

/// String-valued key-value store.
pub trait LocalStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key is absent
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace a value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; returns whether it existed
    fn remove_item(&self, key: &str) -> Result<bool>;

    /// Summary of what the store currently holds
    fn stats(&self) -> Result<StoreStats>;
}

/// Statistics about store contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub entries: usize,
    pub total_size_bytes: usize,
}

/// Get the default storage directory (~/.cache/pokedex on Linux)
pub fn default_storage_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|base| base.join("pokedex"))
}

/// SQLite-backed store
pub struct SqliteStore {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl SqliteStore {
    /// Open or create the store at the default XDG cache location
    pub fn open() -> Result<Self> {
        let dir = default_storage_dir().ok_or(StorageError::NoCacheDir)?;
        Self::open_at(&dir)
    }

    /// Open or create the store inside a specific directory
    pub fn open_at(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .map_err(|e| StorageError::Io(format!("Failed to create storage dir: {}", e)))?;

        let path = dir.join(DB_FILE);
        let conn = Connection::open(&path)?;

        let version: i32 = conn
            .pragma_query_value(None, "user_version", |r| r.get(0))
            .unwrap_or(0);

        if version != 0 && version != SCHEMA_VERSION {
            log::info!(
                "Storage schema version mismatch ({} != {}), rebuilding",
                version,
                SCHEMA_VERSION
            );
            drop(conn);
            std::fs::remove_file(&path)
                .map_err(|e| StorageError::Io(format!("Failed to remove storage DB: {}", e)))?;
            return Self::open_at(dir);
        }

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Location of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| StorageError::Io("Storage connection lock poisoned".to_string()))
    }
}

impl LocalStore for SqliteStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let conn = self.lock()?;
        let value: Option<String> = conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT OR REPLACE INTO local_storage (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM local_storage WHERE key = ?1", [key])?;
        Ok(deleted > 0)
    }

    fn stats(&self) -> Result<StoreStats> {
        let conn = self.lock()?;
        let (entries, size): (i64, i64) = conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(LENGTH(value)), 0) FROM local_storage",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )?;
        Ok(StoreStats {
            entries: entries as usize,
            total_size_bytes: size as usize,
        })
    }
}

/// In-memory store, lost when dropped
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| StorageError::Io("Memory store lock poisoned".to_string()))
    }
}

impl LocalStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        Ok(self.lock()?.remove(key).is_some())
    }

    fn stats(&self) -> Result<StoreStats> {
        let items = self.lock()?;
        Ok(StoreStats {
            entries: items.len(),
            total_size_bytes: items.values().map(String::len).sum(),
        })
    }
}

/// Store whose every operation fails, for exercising error paths
#[cfg(test)]
pub struct FailingStore;

#[cfg(test)]
impl FailingStore {
    fn error() -> StorageError {
        StorageError::Io("disk unavailable".to_string())
    }
}

#[cfg(test)]
impl LocalStore for FailingStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Err(Self::error())
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Self::error())
    }

    fn remove_item(&self, _key: &str) -> Result<bool> {
        Err(Self::error())
    }

    fn stats(&self) -> Result<StoreStats> {
        Err(Self::error())
    }
}
