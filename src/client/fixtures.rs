//! Test fixtures and builders for Pokémon records
//!
//! Import via `use crate::client::fixtures::*` in test modules.

use super::models::{Ability, Pokemon, Species, Stat};

// ============================================================================
// PokemonBuilder
// ============================================================================

/// Builder for creating test Pokemon instances.
///
/// # Example
/// ```ignore
/// let charmander = PokemonBuilder::new(4, "charmander")
///     .types(&["fire"])
///     .stat("attack", 52)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct PokemonBuilder {
    id: u32,
    name: String,
    types: Vec<String>,
    stats: Vec<Stat>,
    height: u32,
    weight: u32,
    abilities: Vec<Ability>,
    sprite_url: Option<String>,
}

impl PokemonBuilder {
    /// Create a new builder with a single "normal" type and no stats.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            types: vec!["normal".to_string()],
            stats: Vec::new(),
            height: 10,
            weight: 100,
            abilities: vec![Ability {
                name: "run-away".to_string(),
                is_hidden: false,
            }],
            sprite_url: None,
        }
    }

    /// Replace the type list.
    pub fn types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Add a base stat.
    pub fn stat(mut self, name: &str, value: u16) -> Self {
        self.stats.push(Stat {
            name: name.to_string(),
            value,
        });
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Replace the ability list with a single ability.
    pub fn ability(mut self, name: &str, is_hidden: bool) -> Self {
        self.abilities = vec![Ability {
            name: name.to_string(),
            is_hidden,
        }];
        self
    }

    pub fn sprite_url(mut self, url: impl Into<String>) -> Self {
        self.sprite_url = Some(url.into());
        self
    }

    /// Build the Pokemon.
    pub fn build(self) -> Pokemon {
        Pokemon {
            id: self.id,
            name: self.name,
            types: self.types,
            stats: self.stats,
            height: self.height,
            weight: self.weight,
            abilities: self.abilities,
            sprite_url: self.sprite_url,
        }
    }
}

/// Records `first..=last` named `pokemon-{id}` with an hp stat equal to the id.
pub fn pokemon_range(first: u32, last: u32) -> Vec<Pokemon> {
    (first..=last)
        .map(|id| {
            PokemonBuilder::new(id, format!("pokemon-{}", id))
                .stat("hp", (id % 256) as u16)
                .build()
        })
        .collect()
}

/// Pikachu, Charmander and Bulbasaur with realistic types and stats.
pub fn starter_trio() -> Vec<Pokemon> {
    vec![
        PokemonBuilder::new(25, "pikachu")
            .types(&["electric"])
            .stat("hp", 35)
            .stat("attack", 55)
            .height(4)
            .weight(60)
            .ability("static", false)
            .build(),
        PokemonBuilder::new(4, "charmander")
            .types(&["fire"])
            .stat("hp", 39)
            .stat("attack", 52)
            .height(6)
            .weight(85)
            .ability("blaze", false)
            .build(),
        PokemonBuilder::new(1, "bulbasaur")
            .types(&["grass", "poison"])
            .stat("hp", 45)
            .stat("attack", 49)
            .height(7)
            .weight(69)
            .ability("overgrow", false)
            .build(),
    ]
}

/// Minimal species entry for `id`.
pub fn species(id: u32, name: &str) -> Species {
    Species {
        id,
        name: name.to_string(),
        genus: Some("Test Pokémon".to_string()),
        flavor_text: Some("A creature used in tests.".to_string()),
        generation: Some("generation-i".to_string()),
        is_legendary: false,
        is_mythical: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let p = PokemonBuilder::new(1, "bulbasaur").build();
        assert_eq!(p.types, vec!["normal"]);
        assert!(p.stats.is_empty());
    }

    #[test]
    fn test_pokemon_range() {
        let records = pokemon_range(3, 5);
        let ids: Vec<u32> = records.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
        assert_eq!(records[0].stat("hp"), 3);
    }
}
