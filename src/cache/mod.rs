//! Local persistence
//!
//! A SQLite-backed key-value store shared by the record cache and the user
//! preferences.

pub mod keys;
pub mod records;
pub mod storage;

use std::time::Duration;

/// Cache TTL defaults
pub struct CacheTtl;

impl CacheTtl {
    /// Loaded record collection
    pub const RECORDS: Duration = Duration::from_secs(60 * 60); // 1 hr
}

pub use records::RecordCache;
pub use storage::{LocalStore, MemoryStore, SqliteStore};
