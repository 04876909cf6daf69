//! PokeAPI client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::PokeApi;
use super::models::{
    NamedResource, Pokemon, PokemonResponse, Reference, ResourceList, Species, SpeciesResponse,
};
use super::pagination::{ListPage, PageRequest};
use crate::config::Config;
use crate::error::{ApiError, ConfigError, Result};

/// Request timeout for every call
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// PokeAPI HTTP client
pub struct PokeApiClient {
    http: HttpClient,
    base_url: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl PokeApiClient {
    /// Create a client for `base_url`, pacing calls to `requests_per_second`
    pub fn new(base_url: impl Into<String>, requests_per_second: u32) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let rate = NonZeroU32::new(requests_per_second).ok_or_else(|| {
            ConfigError::Invalid("requests_per_second must be at least 1".to_string())
        })?;
        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(rate)));

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            rate_limiter,
        })
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_base.clone(), config.requests_per_second)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON body.
    ///
    /// `subject` names what was asked for and is used in the not-found message.
    async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
        subject: &str,
    ) -> Result<T> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            status if status.is_success() => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(subject.to_string()).into()),
            status => Err(ApiError::Network(format!("HTTP {} from {}", status, path)).into()),
        }
    }

    async fn fetch_detail_raw(&self, reference: &Reference) -> Result<PokemonResponse> {
        let path = format!("/pokemon/{}", reference.path_segment());
        self.request(&path, &[], &reference.to_string()).await
    }
}

#[async_trait]
impl PokeApi for PokeApiClient {
    async fn fetch_list(&self, page: &PageRequest) -> Result<ListPage> {
        let list: ResourceList = self
            .request("/pokemon", &page.to_query_params(), "pokemon list")
            .await?;
        debug!(
            "List page offset={} returned {} of {:?}",
            page.offset,
            list.results.len(),
            list.count
        );
        Ok(ListPage::new(list, *page))
    }

    async fn fetch_detail(&self, reference: &Reference) -> Result<Pokemon> {
        let raw = self.fetch_detail_raw(reference).await?;
        Ok(Pokemon::try_from(raw)?)
    }

    async fn fetch_moves(&self, id: u32) -> Result<Vec<String>> {
        let raw = self.fetch_detail_raw(&Reference::Id(id)).await?;
        Ok(raw.move_names())
    }

    async fn fetch_species(&self, id: u32) -> Result<Species> {
        let path = format!("/pokemon-species/{}", id);
        let raw: SpeciesResponse = self
            .request(&path, &[], &format!("species #{}", id))
            .await?;
        Ok(Species::from(raw))
    }

    async fn fetch_types(&self) -> Result<Vec<NamedResource>> {
        #[derive(Deserialize)]
        struct TypeList {
            results: Vec<NamedResource>,
        }

        let list: TypeList = self.request("/type", &[], "type list").await?;
        Ok(list.results)
    }
}
