//! Pokémon record models
//!
//! `PokemonResponse` mirrors the raw `/pokemon/{id}` payload; `Pokemon` is the
//! validated record the rest of the crate works with.

use serde::{Deserialize, Serialize};

use super::resource::NamedResource;
use crate::error::ApiError;

/// Number of moves surfaced by the moves lookup
pub const MOVES_LIMIT: usize = 10;

/// Base URL for PokeAPI sprite images
pub const SPRITES_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    /// National dex number
    pub id: u32,

    /// Lowercase canonical name
    pub name: String,

    /// Type names; the first is the primary type
    pub types: Vec<String>,

    /// Base stats in API order
    pub stats: Vec<Stat>,

    /// Height in decimeters
    pub height: u32,

    /// Weight in hectograms
    pub weight: u32,

    pub abilities: Vec<Ability>,

    /// Artwork URL reported by the API, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_url: Option<String>,
}

/// A named base stat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub value: u16,
}

/// An ability slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

impl Pokemon {
    /// Value of the named stat; a missing stat reads as 0
    pub fn stat(&self, name: &str) -> u16 {
        self.stats
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value)
            .unwrap_or(0)
    }

    /// Primary (first) type name, empty when the record has none
    pub fn primary_type(&self) -> &str {
        self.types.first().map(String::as_str).unwrap_or("")
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }

    /// Artwork URL, falling back to the official-artwork URL built from the id
    pub fn image_url(&self) -> String {
        self.sprite_url
            .clone()
            .unwrap_or_else(|| official_artwork_url(self.id))
    }

    /// Sum of all base stats
    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|s| u32::from(s.value)).sum()
    }
}

/// Official-artwork URL for a dex number
pub fn official_artwork_url(id: u32) -> String {
    format!("{}/other/official-artwork/{}.png", SPRITES_BASE_URL, id)
}

// ============================================================================
// Wire format
// ============================================================================

/// Raw `/pokemon/{id_or_name}` response (only the fields we use)
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub sprites: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_info: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u16,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub move_info: NamedResource,
}

impl PokemonResponse {
    /// Names of the first `MOVES_LIMIT` moves
    pub fn move_names(&self) -> Vec<String> {
        self.moves
            .iter()
            .take(MOVES_LIMIT)
            .map(|m| m.move_info.name.clone())
            .collect()
    }

    fn sprite_url(&self) -> Option<String> {
        ["/other/official-artwork/front_default", "/front_default"]
            .iter()
            .find_map(|pointer| {
                self.sprites
                    .pointer(pointer)
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            })
    }
}

impl TryFrom<PokemonResponse> for Pokemon {
    type Error = ApiError;

    fn try_from(raw: PokemonResponse) -> Result<Self, Self::Error> {
        if raw.id == 0 {
            return Err(ApiError::InvalidResponse(format!(
                "Pokémon \"{}\" has id 0",
                raw.name
            )));
        }
        if raw.name.trim().is_empty() {
            return Err(ApiError::InvalidResponse(format!(
                "Pokémon #{} has an empty name",
                raw.id
            )));
        }
        if raw.types.is_empty() {
            return Err(ApiError::InvalidResponse(format!(
                "Pokémon #{} has no types",
                raw.id
            )));
        }

        let sprite_url = raw.sprite_url();

        let mut type_slots = raw.types;
        type_slots.sort_by_key(|t| t.slot);

        Ok(Pokemon {
            id: raw.id,
            name: raw.name.to_lowercase(),
            types: type_slots.into_iter().map(|t| t.type_info.name).collect(),
            stats: raw
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            height: raw.height,
            weight: raw.weight,
            abilities: raw
                .abilities
                .into_iter()
                .map(|a| Ability {
                    name: a.ability.name,
                    is_hidden: a.is_hidden,
                })
                .collect(),
            sprite_url,
        })
    }
}
