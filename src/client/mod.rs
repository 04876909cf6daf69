//! PokeAPI client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod parallel;
pub mod pokeapi;

#[cfg(test)]
pub use mock::MockPokeApi;
pub use models::{Ability, NamedResource, Pokemon, Reference, Species};
pub use pagination::{ListPage, PageRequest};
pub use parallel::fetch_details_batch;
pub use pokeapi::PokeApiClient;

/// PokeAPI client trait
#[async_trait]
pub trait PokeApi: Send + Sync {
    /// Fetch one page of `{name, url}` summaries with the total-count hint
    async fn fetch_list(&self, page: &PageRequest) -> Result<ListPage>;

    /// Fetch one record by id or name
    async fn fetch_detail(&self, reference: &Reference) -> Result<Pokemon>;

    /// First ten move names for a record
    async fn fetch_moves(&self, id: u32) -> Result<Vec<String>>;

    /// Species entry (flavor text, genus, generation)
    async fn fetch_species(&self, id: u32) -> Result<Species>;

    /// All type names the API knows about
    async fn fetch_types(&self) -> Result<Vec<NamedResource>>;

    /// Abilities for a record, read from its detail payload
    async fn fetch_abilities(&self, id: u32) -> Result<Vec<Ability>> {
        let pokemon = self.fetch_detail(&Reference::Id(id)).await?;
        Ok(pokemon.abilities)
    }
}
