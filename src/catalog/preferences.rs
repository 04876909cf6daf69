//! Persisted user preferences: last search term and theme

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::warn;
use serde::Serialize;

use crate::cache::keys;
use crate::cache::storage::LocalStore;

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

/// Preferences backed by the local store.
///
/// Reads treat missing or unreadable values as unset; write failures are
/// logged and dropped.
pub struct Preferences {
    store: Arc<dyn LocalStore>,
}

impl Preferences {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not read preference {}: {}", key, e);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> bool {
        match self.store.set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                warn!("Could not save preference {}: {}", key, e);
                false
            }
        }
    }

    /// Last non-blank search term, if one was saved
    pub fn last_search(&self) -> Option<String> {
        self.read(keys::LAST_SEARCH)
            .filter(|term| !term.trim().is_empty())
    }

    /// Remember `term` as the last search. Blank terms are not saved.
    ///
    /// Returns whether the term was written.
    pub fn set_last_search(&self, term: &str) -> bool {
        if term.trim().is_empty() {
            return false;
        }
        self.write(keys::LAST_SEARCH, term)
    }

    /// Saved theme, defaulting to light when unset or unrecognised
    pub fn theme(&self) -> Theme {
        self.saved_theme().unwrap_or_default()
    }

    /// Saved theme, `None` when unset or unrecognised
    pub fn saved_theme(&self) -> Option<Theme> {
        let raw = self.read(keys::THEME)?;
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                warn!("Ignoring stored theme: {}", e);
                None
            }
        }
    }

    pub fn set_theme(&self, theme: Theme) -> bool {
        self.write(keys::THEME, theme.as_str())
    }

    /// Flip the theme and persist it, returning the new theme
    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }
}
