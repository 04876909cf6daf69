//! Client-side search, category filter and sort over loaded records

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::client::models::Pokemon;

/// Category value that disables the category filter
pub const ALL_CATEGORIES: &str = "all";

/// Stat names accepted as sort keys
pub const SORTABLE_STATS: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// Field to sort by
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Id,
    Name,
    /// Primary type name
    Category,
    /// Named base stat; missing stats sort as 0
    Stat(String),
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "type" | "category" => Ok(SortKey::Category),
            stat if SORTABLE_STATS.contains(&stat) => Ok(SortKey::Stat(key)),
            other => Err(format!(
                "unknown sort key '{}' (expected id, name, type or one of: {})",
                other,
                SORTABLE_STATS.join(", ")
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Id => write!(f, "id"),
            SortKey::Name => write!(f, "name"),
            SortKey::Category => write!(f, "type"),
            SortKey::Stat(name) => write!(f, "{}", name),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction '{}' (expected asc or desc)", other)),
        }
    }
}

/// Current search, category and sort selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub active_category: String,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            active_category: ALL_CATEGORIES.to_string(),
            sort_key: SortKey::default(),
            direction: SortDirection::default(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Restrict to one type; `"all"` (any case) clears the restriction.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.active_category = category.into().trim().to_lowercase();
        if self.active_category.is_empty() {
            self.active_category = ALL_CATEGORIES.to_string();
        }
        self
    }

    pub fn sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.direction = direction;
        self
    }

    /// Whether a search term is in effect
    pub fn has_search(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    /// Whether a category restriction is in effect
    pub fn has_category(&self) -> bool {
        self.active_category != ALL_CATEGORIES
    }
}

/// Search, then restrict by category, then sort. The input is left untouched.
pub fn apply(records: &[Pokemon], filter: &FilterState) -> Vec<Pokemon> {
    let term = filter.search_term.to_lowercase();

    let mut filtered: Vec<Pokemon> = records
        .iter()
        .filter(|p| !filter.has_search() || matches_search(p, &term))
        .filter(|p| !filter.has_category() || p.has_type(&filter.active_category))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        let ordering = compare(a, b, &filter.sort_key);
        match filter.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    filtered
}

/// `term` must already be lowercase and non-empty
fn matches_search(pokemon: &Pokemon, term: &str) -> bool {
    pokemon.name.to_lowercase().contains(term)
        || pokemon
            .types
            .iter()
            .any(|t| t.to_lowercase().contains(term))
        || pokemon.id.to_string().contains(term)
}

fn compare(a: &Pokemon, b: &Pokemon, key: &SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Category => a.primary_type().cmp(b.primary_type()),
        SortKey::Stat(name) => a.stat(name).cmp(&b.stat(name)),
    }
}

/// How much of the loaded collection the filter shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub total: usize,
    pub showing: usize,
    /// Rounded share shown, 0 when nothing is loaded
    pub percentage: u32,
}

pub fn stats(all: &[Pokemon], filtered: &[Pokemon]) -> FilterStats {
    let total = all.len();
    let showing = filtered.len();
    let percentage = if total == 0 {
        0
    } else {
        ((showing as f64 / total as f64) * 100.0).round() as u32
    };
    FilterStats {
        total,
        showing,
        percentage,
    }
}

/// Sorted, de-duplicated type names across `records`
pub fn available_types(records: &[Pokemon]) -> Vec<String> {
    records
        .iter()
        .flat_map(|p| p.types.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
