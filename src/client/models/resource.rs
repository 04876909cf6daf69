//! Shared resource and reference models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A `{name, url}` pointer as returned by every PokeAPI list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// Numeric id encoded as the last path segment of the resource URL
    /// (e.g. `https://pokeapi.co/api/v2/pokemon/25/` -> 25).
    pub fn id(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }

    /// Detail reference for this entry, preferring the numeric id
    pub fn reference(&self) -> Reference {
        match self.id() {
            Some(id) => Reference::Id(id),
            None => Reference::Name(self.name.clone()),
        }
    }
}

/// Paged list envelope (`{count, next, previous, results}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceList {
    /// Total number of entries the API knows about
    #[serde(default)]
    pub count: Option<usize>,

    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,

    pub results: Vec<NamedResource>,
}

/// Identifies one Pokémon on the detail endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reference {
    Id(u32),
    Name(String),
}

impl Reference {
    /// Path segment used in the detail URL; names are lower-cased
    pub fn path_segment(&self) -> String {
        match self {
            Reference::Id(id) => id.to_string(),
            Reference::Name(name) => name.trim().to_lowercase(),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Id(id) => write!(f, "#{}", id),
            Reference::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

impl FromStr for Reference {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('#');
        if trimmed.is_empty() {
            return Err(ApiError::NotFound("empty name".to_string()));
        }
        match trimmed.parse::<u32>() {
            Ok(0) => Err(ApiError::NotFound("#0".to_string())),
            Ok(id) => Ok(Reference::Id(id)),
            Err(_) if trimmed.contains(['/', '?', '#']) => {
                Err(ApiError::NotFound(format!("\"{}\" is not a valid name", trimmed)))
            }
            Err(_) => Ok(Reference::Name(trimmed.to_lowercase())),
        }
    }
}

impl From<u32> for Reference {
    fn from(id: u32) -> Self {
        Reference::Id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(name: &str, url: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_named_resource_id_from_url() {
        let r = resource("pikachu", "https://pokeapi.co/api/v2/pokemon/25/");
        assert_eq!(r.id(), Some(25));
        assert_eq!(r.reference(), Reference::Id(25));
    }

    #[test]
    fn test_named_resource_without_trailing_slash() {
        let r = resource("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1");
        assert_eq!(r.id(), Some(1));
    }

    #[test]
    fn test_named_resource_falls_back_to_name() {
        let r = resource("pikachu", "not-a-url");
        assert_eq!(r.reference(), Reference::Name("pikachu".to_string()));
    }

    #[test]
    fn test_reference_parse() {
        assert_eq!("25".parse::<Reference>().unwrap(), Reference::Id(25));
        assert_eq!("#7".parse::<Reference>().unwrap(), Reference::Id(7));
        assert_eq!(
            " Pikachu ".parse::<Reference>().unwrap(),
            Reference::Name("pikachu".to_string())
        );
        assert!("".parse::<Reference>().is_err());
        assert!("0".parse::<Reference>().is_err());
    }

    #[test]
    fn test_reference_rejects_url_characters() {
        for input in ["../type", "a/b", "pikachu?x=1", "mew#2"] {
            let err = input.parse::<Reference>().unwrap_err();
            assert!(matches!(err, ApiError::NotFound(_)), "{input}");
        }
    }

    #[test]
    fn test_reference_path_segment_lowercases() {
        let r = Reference::Name("MewTwo".to_string());
        assert_eq!(r.path_segment(), "mewtwo");
        assert_eq!(Reference::Id(150).path_segment(), "150");
    }

    #[test]
    fn test_resource_list_deserialize() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "previous": null,
            "results": [{"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}]
        }"#;
        let list: ResourceList = serde_json::from_str(json).unwrap();
        assert_eq!(list.count, Some(1302));
        assert!(list.next.is_some());
        assert_eq!(list.results.len(), 1);
    }
}
