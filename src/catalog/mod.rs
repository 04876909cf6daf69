//! Catalog session: loading, filtering and user preferences

pub mod controller;
pub mod filter;
pub mod preferences;

pub use controller::{CatalogController, LoadSettings, LoadSource};
pub use filter::{FilterState, FilterStats, SortDirection, SortKey};
pub use preferences::{Preferences, Theme};
