//! Types command: every type the API knows, with local counts
//!
//! Types that only appear in the loaded records (an API base serving extra
//! types, or a stale cache) are listed after the API's own.

use std::collections::HashMap;

use log::debug;

use crate::catalog::filter::available_types;
use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::{NamedResource, PokeApi, Pokemon};
use crate::error::Result;
use crate::models::TypeDisplay;
use crate::output::Formattable;
use crate::output::progress::spinner;

/// Run the types command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let progress = spinner(ctx.format, "Fetching types...");
    let types = ctx.client.fetch_types().await;
    progress.finish_and_clear();
    let types = types?;

    // Counts come from the cache only; no records are fetched here
    let mut cache = ctx.record_cache();
    cache.load_from_storage();
    let loaded = cache.get().unwrap_or_default();
    debug!("Counting types over {} cached records", loaded.len());

    rows(&types, loaded).print(ctx.format)
}

fn rows(types: &[NamedResource], loaded: &[Pokemon]) -> Vec<TypeDisplay> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for pokemon in loaded {
        for type_name in &pokemon.types {
            *counts.entry(type_name.as_str()).or_default() += 1;
        }
    }

    let mut rows: Vec<TypeDisplay> = types
        .iter()
        .map(|t| TypeDisplay::new(t, counts.get(t.name.as_str()).copied().unwrap_or(0)))
        .collect();

    for name in available_types(loaded) {
        if !types.iter().any(|t| t.name == name) {
            let local = NamedResource {
                url: String::new(),
                name,
            };
            let count = counts.get(local.name.as_str()).copied().unwrap_or(0);
            rows.push(TypeDisplay::new(&local, count));
        }
    }
    rows
}
