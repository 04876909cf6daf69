//! Keys used in the local key-value store

/// Cached record collection (`{"data": [...], "timestamp": <ms>}`)
pub const RECORDS: &str = "pokemon_cache";

/// Theme preference (`"light"` or `"dark"`)
pub const THEME: &str = "pokemon_explorer_theme";

/// Last non-blank search term
pub const LAST_SEARCH: &str = "pokemon_explorer_last_search";

/// Every key this program writes
pub const ALL: [&str; 3] = [RECORDS, THEME, LAST_SEARCH];
