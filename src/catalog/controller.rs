//! Pagination and load controller
//!
//! Drives the initial cache-or-fetch load and incremental load-more rounds,
//! keeping the accumulated records free of duplicate ids.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info, warn};
use serde::Serialize;

use crate::cache::RecordCache;
use crate::client::models::{NamedResource, Pokemon, Reference};
use crate::client::pagination::{ListPage, PageRequest};
use crate::client::{PokeApi, fetch_details_batch};
use crate::config::Config;
use crate::error::Result;

/// Where the controller is in its load cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadingMore,
    /// Initial load failed; holds the error message
    Error(String),
}

/// Page sizes and concurrency for loads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSettings {
    pub initial_page_size: usize,
    pub load_more_page_size: usize,
    pub max_concurrent: usize,
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl LoadSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            initial_page_size: config.page_size,
            load_more_page_size: config.load_more_size,
            max_concurrent: config.max_concurrent,
        }
    }
}

/// Where an initial load got its records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadSource {
    Cache,
    Network,
    /// A load was already in progress
    Skipped,
}

/// Result of one load-more round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMoreOutcome {
    /// `added` new records appended, `dropped` duplicates discarded
    Appended { added: usize, dropped: usize },
    /// Not loaded, or nothing more to load
    Skipped,
}

/// Session-scoped catalog loader.
pub struct CatalogController<C: PokeApi> {
    client: Arc<C>,
    cache: RecordCache,
    settings: LoadSettings,
    state: LoadState,
    records: Vec<Pokemon>,
    offset: usize,
    can_load_more: bool,
}

impl<C: PokeApi> CatalogController<C> {
    pub fn new(client: Arc<C>, cache: RecordCache, settings: LoadSettings) -> Self {
        Self {
            client,
            cache,
            settings,
            state: LoadState::Idle,
            records: Vec::new(),
            offset: 0,
            can_load_more: false,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Records loaded so far, in load order
    pub fn records(&self) -> &[Pokemon] {
        &self.records
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn can_load_more(&self) -> bool {
        self.can_load_more
    }

    pub fn cache(&self) -> &RecordCache {
        &self.cache
    }

    fn is_busy(&self) -> bool {
        matches!(self.state, LoadState::Loading | LoadState::LoadingMore)
    }

    /// Load the first page, from the cache when it is fresh.
    ///
    /// On failure the controller enters `Error` with no records and the error
    /// is returned.
    pub async fn load_initial(&mut self) -> Result<LoadSource> {
        if self.is_busy() {
            debug!("Initial load skipped: already loading");
            return Ok(LoadSource::Skipped);
        }
        self.state = LoadState::Loading;

        self.cache.load_from_storage();
        if let Some(cached) = self.cache.get() {
            self.records = cached.to_vec();
            self.offset = self.records.len();
            self.can_load_more = !self.records.is_empty();
            self.state = LoadState::Loaded;
            info!("Using {} cached records", self.records.len());
            return Ok(LoadSource::Cache);
        }

        let request = PageRequest::new(self.settings.initial_page_size);
        match self.fetch_page(request).await {
            Ok((batch, page)) => {
                self.records.clear();
                self.append(batch);
                self.offset = self.records.len();
                self.can_load_more = page.has_more();
                self.state = LoadState::Loaded;
                self.cache.set(self.records.clone());
                Ok(LoadSource::Network)
            }
            Err(e) => {
                self.records.clear();
                self.offset = 0;
                self.can_load_more = false;
                self.state = LoadState::Error(e.to_string());
                Err(e)
            }
        }
    }

    /// Fetch the next page and append it.
    ///
    /// A no-op unless `Loaded` with more to load. On failure the controller
    /// returns to `Loaded` with its records untouched and the error is returned.
    pub async fn load_more(&mut self) -> Result<LoadMoreOutcome> {
        if self.state != LoadState::Loaded || !self.can_load_more {
            debug!(
                "Load more skipped (state {:?}, can_load_more {})",
                self.state, self.can_load_more
            );
            return Ok(LoadMoreOutcome::Skipped);
        }
        self.state = LoadState::LoadingMore;

        let request = PageRequest::new(self.settings.load_more_page_size).offset(self.records.len());
        match self.fetch_page(request).await {
            Ok((batch, page)) => {
                let (added, dropped) = self.append(batch);
                if dropped > 0 {
                    debug!("Dropped {} duplicate records", dropped);
                }
                self.offset = self.records.len();
                self.can_load_more = page.has_more();
                self.state = LoadState::Loaded;
                self.cache.set(self.records.clone());
                Ok(LoadMoreOutcome::Appended { added, dropped })
            }
            Err(e) => {
                warn!("Load more failed: {}", e);
                self.state = LoadState::Loaded;
                Err(e)
            }
        }
    }

    /// Run up to `rounds` load-more rounds, stopping once nothing is left.
    ///
    /// Returns the number of records added. An error stops the loop with the
    /// records loaded so far kept.
    pub async fn load_until(&mut self, rounds: usize) -> Result<usize> {
        let mut added_total = 0;
        for _ in 0..rounds {
            match self.load_more().await? {
                LoadMoreOutcome::Appended { added, .. } => added_total += added,
                LoadMoreOutcome::Skipped => break,
            }
            if !self.can_load_more {
                break;
            }
        }
        Ok(added_total)
    }

    /// Discard in-memory pagination state. The stored cache is kept.
    pub fn reset(&mut self) {
        self.state = LoadState::Idle;
        self.records.clear();
        self.offset = 0;
        self.can_load_more = false;
    }

    /// Clear the cache, reset and load again from the network
    pub async fn refresh(&mut self) -> Result<LoadSource> {
        self.cache.clear();
        self.reset();
        self.load_initial().await
    }

    async fn fetch_page(&self, request: PageRequest) -> Result<(Vec<Pokemon>, ListPage)> {
        let page = self.client.fetch_list(&request).await?;
        debug!(
            "Listed {} of {:?} at offset {}",
            page.items.len(),
            page.total_count,
            request.offset
        );
        let references: Vec<Reference> = page.items.iter().map(NamedResource::reference).collect();
        let records =
            fetch_details_batch(self.client.as_ref(), &references, self.settings.max_concurrent)
                .await?;
        Ok((records, page))
    }

    /// Append records whose id is not already present
    fn append(&mut self, batch: Vec<Pokemon>) -> (usize, usize) {
        let mut seen: HashSet<u32> = self.records.iter().map(|p| p.id).collect();
        let before = self.records.len();
        let incoming = batch.len();

        self.records
            .extend(batch.into_iter().filter(|p| seen.insert(p.id)));

        let added = self.records.len() - before;
        (added, incoming - added)
    }
}
