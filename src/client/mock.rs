//! Mock PokeAPI client for testing
//!
//! An in-memory `PokeApi` that serves a configured set of records, counts
//! calls and can inject failures.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

use super::PokeApi;
use super::models::{NamedResource, Pokemon, Reference, Species};
use super::pagination::{ListPage, PageRequest};
use crate::client::models::ResourceList;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockPokeApi::new().with_pokemon(pokemon_range(1, 30)).await;
/// let page = mock.fetch_list(&PageRequest::new(20)).await?;
/// assert_eq!(page.items.len(), 20);
/// ```
#[derive(Default)]
pub struct MockPokeApi {
    /// Records served by list and detail, in list order
    pokemon: Arc<Mutex<Vec<Pokemon>>>,
    /// Total-count hint reported by list; defaults to the record count
    count_hint: Arc<Mutex<Option<usize>>>,
    /// Species served by fetch_species
    species: Arc<Mutex<Vec<Species>>>,
    /// Move names served by fetch_moves
    moves: Arc<Mutex<Vec<String>>>,
    /// Type names served by fetch_types
    types: Arc<Mutex<Vec<String>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Artificial latency for detail calls
    delay: Arc<Mutex<Option<Duration>>>,
    call_count: Arc<Mutex<CallCounts>>,
    captured_pages: Arc<Mutex<Vec<PageRequest>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub fetch_list: usize,
    pub fetch_detail: usize,
    pub fetch_moves: usize,
    pub fetch_species: usize,
    pub fetch_types: usize,
}

impl CallCounts {
    /// Total number of API calls made
    pub fn total(&self) -> usize {
        self.fetch_list + self.fetch_detail + self.fetch_moves + self.fetch_species + self.fetch_types
    }
}

impl MockPokeApi {
    /// Create a new mock client with no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the records served by list and detail.
    pub async fn with_pokemon(self, pokemon: Vec<Pokemon>) -> Self {
        *self.pokemon.lock().await = pokemon;
        self
    }

    /// Override the total-count hint returned by list.
    pub async fn with_count_hint(self, count: usize) -> Self {
        *self.count_hint.lock().await = Some(count);
        self
    }

    pub async fn with_species(self, species: Vec<Species>) -> Self {
        *self.species.lock().await = species;
        self
    }

    pub async fn with_moves(self, moves: Vec<String>) -> Self {
        *self.moves.lock().await = moves;
        self
    }

    pub async fn with_types(self, types: Vec<String>) -> Self {
        *self.types.lock().await = types;
        self
    }

    /// Delay every detail call by `delay`.
    pub async fn with_delay(self, delay: Duration) -> Self {
        *self.delay.lock().await = Some(delay);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        self.fail_next(error).await;
        self
    }

    /// Inject an error into a mock that is already shared.
    pub async fn fail_next(&self, error: ApiError) {
        *self.error.lock().await = Some(error);
    }

    /// Append records after construction (simulates the API growing).
    pub async fn push_pokemon(&self, pokemon: Vec<Pokemon>) {
        self.pokemon.lock().await.extend(pokemon);
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Every page request received by fetch_list, in order.
    pub async fn captured_pages(&self) -> Vec<PageRequest> {
        self.captured_pages.lock().await.clone()
    }

    /// Highest number of detail calls observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    fn resource_for(pokemon: &Pokemon) -> NamedResource {
        NamedResource {
            name: pokemon.name.clone(),
            url: format!("https://pokeapi.co/api/v2/pokemon/{}/", pokemon.id),
        }
    }
}

#[async_trait]
impl PokeApi for MockPokeApi {
    async fn fetch_list(&self, page: &PageRequest) -> Result<ListPage> {
        self.captured_pages.lock().await.push(*page);
        self.check_error().await?;
        self.call_count.lock().await.fetch_list += 1;

        let pokemon = self.pokemon.lock().await;
        let results: Vec<NamedResource> = pokemon
            .iter()
            .skip(page.offset)
            .take(page.limit)
            .map(Self::resource_for)
            .collect();
        let count = self.count_hint.lock().await.unwrap_or(pokemon.len());

        Ok(ListPage::new(
            ResourceList {
                count: Some(count),
                next: None,
                previous: None,
                results,
            },
            *page,
        ))
    }

    async fn fetch_detail(&self, reference: &Reference) -> Result<Pokemon> {
        self.check_error().await?;
        self.call_count.lock().await.fetch_detail += 1;

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        let delay = *self.delay.lock().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let found = self
            .pokemon
            .lock()
            .await
            .iter()
            .find(|p| match reference {
                Reference::Id(id) => p.id == *id,
                Reference::Name(name) => p.name == reference_name(name),
            })
            .cloned();

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        found.ok_or_else(|| ApiError::NotFound(reference.to_string()).into())
    }

    async fn fetch_moves(&self, _id: u32) -> Result<Vec<String>> {
        self.check_error().await?;
        self.call_count.lock().await.fetch_moves += 1;
        Ok(self.moves.lock().await.clone())
    }

    async fn fetch_species(&self, id: u32) -> Result<Species> {
        self.check_error().await?;
        self.call_count.lock().await.fetch_species += 1;

        self.species
            .lock()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("species #{}", id)).into())
    }

    async fn fetch_types(&self) -> Result<Vec<NamedResource>> {
        self.check_error().await?;
        self.call_count.lock().await.fetch_types += 1;

        Ok(self
            .types
            .lock()
            .await
            .iter()
            .map(|name| NamedResource {
                name: name.clone(),
                url: String::new(),
            })
            .collect())
    }
}

fn reference_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::pokemon_range;

    #[tokio::test]
    async fn test_mock_default_empty() {
        let mock = MockPokeApi::new();
        let page = mock.fetch_list(&PageRequest::new(20)).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, Some(0));
    }

    #[tokio::test]
    async fn test_mock_list_pages_by_offset() {
        let mock = MockPokeApi::new().with_pokemon(pokemon_range(1, 25)).await;

        let page = mock
            .fetch_list(&PageRequest::new(10).offset(20))
            .await
            .unwrap();
        let ids: Vec<Option<u32>> = page.items.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![Some(21), Some(22), Some(23), Some(24), Some(25)]);
        assert_eq!(page.total_count, Some(25));
    }

    #[tokio::test]
    async fn test_mock_with_error_consumed() {
        let mock = MockPokeApi::new()
            .with_pokemon(pokemon_range(1, 2))
            .await
            .with_error(ApiError::Network("boom".to_string()))
            .await;

        assert!(mock.fetch_detail(&Reference::Id(1)).await.is_err());
        assert!(mock.fetch_detail(&Reference::Id(1)).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_call_counts() {
        let mock = MockPokeApi::new().with_pokemon(pokemon_range(1, 2)).await;

        mock.fetch_list(&PageRequest::new(2)).await.unwrap();
        mock.fetch_detail(&Reference::Id(1)).await.unwrap();
        mock.fetch_detail(&Reference::Id(2)).await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.fetch_list, 1);
        assert_eq!(counts.fetch_detail, 2);
        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn test_mock_default_abilities_via_detail() {
        let mock = MockPokeApi::new().with_pokemon(pokemon_range(1, 1)).await;

        let abilities = mock.fetch_abilities(1).await.unwrap();
        assert_eq!(abilities.len(), 1);
        assert_eq!(mock.call_counts().await.fetch_detail, 1);
    }
}
