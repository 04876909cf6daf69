//! PokeAPI data models
//!
//! Wire types mirror the JSON the API returns; domain types are what the
//! cache, controller and output layers consume.

mod pokemon;
mod resource;
mod species;

pub use pokemon::{
    Ability, MOVES_LIMIT, Pokemon, PokemonResponse, SPRITES_BASE_URL, Stat, official_artwork_url,
};
pub use resource::{NamedResource, Reference, ResourceList};
pub use species::{Species, SpeciesResponse};
