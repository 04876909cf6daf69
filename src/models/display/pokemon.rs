//! Pokémon display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{Pokemon, Species};
use crate::output::formatters::{
    capitalize, format_ability, format_height, format_id, format_type, format_weight, generation,
    stat_label,
};

/// One row of the catalog list.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PokemonDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    /// Types joined with `/`
    #[tabled(rename = "TYPES")]
    pub types: String,

    #[tabled(rename = "HP")]
    pub hp: u16,

    #[tabled(rename = "ATK")]
    pub attack: u16,

    #[tabled(rename = "DEF")]
    pub defense: u16,

    #[tabled(rename = "SPD")]
    pub speed: u16,

    #[tabled(rename = "TOTAL")]
    pub total: u32,
}

impl From<&Pokemon> for PokemonDisplay {
    fn from(pokemon: &Pokemon) -> Self {
        Self {
            id: format_id(pokemon.id),
            name: capitalize(&pokemon.name),
            types: pokemon
                .types
                .iter()
                .map(|t| format_type(t))
                .collect::<Vec<_>>()
                .join("/"),
            hp: pokemon.stat("hp"),
            attack: pokemon.stat("attack"),
            defense: pokemon.stat("defense"),
            speed: pokemon.stat("speed"),
            total: pokemon.base_stat_total(),
        }
    }
}

/// Field/value rows for the `show` command in table format
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DetailField {
    #[tabled(rename = "FIELD")]
    pub field: String,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl DetailField {
    fn new(field: &str, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

/// Everything the `show` command knows about one record
#[derive(Debug, Clone, Serialize)]
pub struct PokemonDetail {
    #[serde(flatten)]
    pub pokemon: Pokemon,

    /// Artwork URL, constructed from the id when the API gave none
    pub image_url: String,

    pub generation: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<Species>,

    pub moves: Vec<String>,
}

impl PokemonDetail {
    pub fn new(pokemon: Pokemon, species: Option<Species>, moves: Vec<String>) -> Self {
        Self {
            image_url: pokemon.image_url(),
            generation: generation(pokemon.id).to_string(),
            pokemon,
            species,
            moves,
        }
    }

    /// Flatten into field/value rows
    pub fn fields(&self) -> Vec<DetailField> {
        let p = &self.pokemon;
        let mut rows = vec![
            DetailField::new("ID", format_id(p.id)),
            DetailField::new("Name", capitalize(&p.name)),
            DetailField::new(
                "Types",
                p.types
                    .iter()
                    .map(|t| format_type(t))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            DetailField::new("Height", format_height(p.height)),
            DetailField::new("Weight", format_weight(p.weight)),
            DetailField::new("Generation", self.generation.clone()),
        ];

        if let Some(genus) = self.species.as_ref().and_then(|s| s.genus.as_ref()) {
            rows.push(DetailField::new("Genus", genus.clone()));
        }

        for stat in &p.stats {
            rows.push(DetailField::new(&stat_label(&stat.name), stat.value.to_string()));
        }
        rows.push(DetailField::new("Total", p.base_stat_total().to_string()));

        let abilities: Vec<String> = p
            .abilities
            .iter()
            .map(|a| {
                if a.is_hidden {
                    format!("{} (hidden)", format_ability(&a.name))
                } else {
                    format_ability(&a.name)
                }
            })
            .collect();
        rows.push(DetailField::new("Abilities", abilities.join(", ")));

        if !self.moves.is_empty() {
            let moves: Vec<String> = self.moves.iter().map(|m| format_ability(m)).collect();
            rows.push(DetailField::new("Moves", moves.join(", ")));
        }

        rows.push(DetailField::new("Image", self.image_url.clone()));
        rows
    }
}
