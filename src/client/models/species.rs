//! Species models

use serde::{Deserialize, Serialize};

use super::resource::NamedResource;

/// Species information shown on the detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: u32,
    pub name: String,
    /// English genus, e.g. "Mouse Pokémon"
    pub genus: Option<String>,
    /// First English Pokédex entry, whitespace-normalized
    pub flavor_text: Option<String>,
    /// Generation resource name, e.g. "generation-i"
    pub generation: Option<String>,
    pub is_legendary: bool,
    pub is_mythical: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub genera: Vec<GenusEntry>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub generation: Option<NamedResource>,
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenusEntry {
    pub genus: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

const ENGLISH: &str = "en";

/// Collapse the form feeds and hard line breaks PokeAPI keeps from the games
fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl From<SpeciesResponse> for Species {
    fn from(raw: SpeciesResponse) -> Self {
        let genus = raw
            .genera
            .iter()
            .find(|g| g.language.name == ENGLISH)
            .map(|g| g.genus.clone());
        let flavor_text = raw
            .flavor_text_entries
            .iter()
            .find(|f| f.language.name == ENGLISH)
            .map(|f| normalize_text(&f.flavor_text));

        Species {
            id: raw.id,
            name: raw.name,
            genus,
            flavor_text,
            generation: raw.generation.map(|g| g.name),
            is_legendary: raw.is_legendary,
            is_mythical: raw.is_mythical,
        }
    }
}
