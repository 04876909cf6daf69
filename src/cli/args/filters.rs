//! Filter argument types for the list command

use clap::Args;

use super::SortDir;
use crate::catalog::filter::ALL_CATEGORIES;
use crate::catalog::{FilterState, SortKey};

/// Search, category, sort and pagination arguments for `list`.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Search by name, type or dex number (case-insensitive substring)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Reuse the last saved search term
    #[arg(long, conflicts_with = "search")]
    pub last: bool,

    /// Only show records of this type ("all" for every type)
    #[arg(long = "type", short = 't', default_value = ALL_CATEGORIES)]
    pub category: String,

    /// Sort key: id, name, type, or a stat (hp, attack, defense, special-attack, special-defense, speed)
    #[arg(long, default_value = "id")]
    pub sort_by: SortKey,

    /// Sort direction (asc, desc)
    #[arg(
        long,
        value_enum,
        default_value = "asc",
        hide_possible_values = true,
        hide_default_value = true
    )]
    pub sort_dir: SortDir,

    /// Load-more rounds to run after the first page
    #[arg(long, default_value_t = 0)]
    pub more: usize,

    /// Drop the cached records and fetch from the API again
    #[arg(long)]
    pub refresh: bool,

    /// Maximum rows to print
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

impl ListArgs {
    /// Build the filter state, using `search` as the search term
    pub fn filter_state(&self, search: Option<&str>) -> FilterState {
        FilterState::new()
            .search(search.unwrap_or_default())
            .category(self.category.as_str())
            .sort(self.sort_by.clone(), self.sort_dir.into())
    }
}
