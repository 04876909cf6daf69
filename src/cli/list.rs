//! List command: load, filter, sort and print the catalog

use colored::Colorize;
use log::debug;
use serde::Serialize;

use crate::catalog::filter;
use crate::catalog::{FilterState, FilterStats, LoadSource, Theme};
use crate::cli::args::{GlobalOptions, ListArgs};
use crate::cli::{CommandContext, OutputFormat};
use crate::client::Pokemon;
use crate::error::Result;
use crate::models::PokemonDisplay;
use crate::output::Formattable;
use crate::output::formatters::accent_color;
use crate::output::json::format_json;
use crate::output::progress::spinner;

/// Filtered view of the loaded records
#[derive(Debug, Serialize)]
struct ListView {
    source: LoadSource,
    search: Option<String>,
    category: String,
    sort: String,
    stats: FilterStats,
    can_load_more: bool,
    records: Vec<Pokemon>,
}

impl ListView {
    fn new(
        all: &[Pokemon],
        state: &FilterState,
        limit: Option<usize>,
        source: LoadSource,
        can_load_more: bool,
    ) -> Self {
        let mut records = filter::apply(all, state);
        let stats = filter::stats(all, &records);
        if let Some(limit) = limit {
            records.truncate(limit);
        }

        Self {
            source,
            search: state.has_search().then(|| state.search_term.clone()),
            category: state.active_category.clone(),
            sort: format!("{} {:?}", state.sort_key, state.direction).to_lowercase(),
            stats,
            can_load_more,
            records,
        }
    }

    fn summary(&self) -> String {
        let mut line = format!(
            "Showing {} of {} loaded ({}%)",
            self.stats.showing, self.stats.total, self.stats.percentage
        );
        if self.records.len() < self.stats.showing {
            line.push_str(&format!(", first {} printed", self.records.len()));
        }
        if self.source == LoadSource::Cache {
            line.push_str(" · from cache");
        }
        if self.can_load_more {
            line.push_str(" · more available (--more N)");
        }
        line
    }
}

/// Run the list command
pub async fn run(opts: &GlobalOptions, args: &ListArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let prefs = ctx.preferences();

    let search = if args.last {
        let last = prefs.last_search();
        debug!("Reusing last search {:?}", last);
        last
    } else {
        args.search.clone()
    };

    let mut controller = ctx.controller();
    let progress = spinner(ctx.format, "Loading Pokémon...");

    let loaded = if args.refresh {
        controller.refresh().await
    } else {
        controller.load_initial().await
    };
    let source = match loaded {
        Ok(source) => source,
        Err(e) => {
            progress.finish_and_clear();
            return Err(e);
        }
    };

    if args.more > 0 {
        progress.set_message("Loading more...");
        if let Err(e) = controller.load_until(args.more).await {
            progress.suspend(|| {
                eprintln!(
                    "{} Could not load more: {} (showing records loaded so far)",
                    "⚠".yellow(),
                    e
                );
            });
        }
    }
    progress.finish_and_clear();

    let state = args.filter_state(search.as_deref());
    let view = ListView::new(
        controller.records(),
        &state,
        args.limit,
        source,
        controller.can_load_more(),
    );

    if let Some(term) = search.as_deref() {
        prefs.set_last_search(term);
    }

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&view)?),
        OutputFormat::Table => rows(&view).print(ctx.format)?,
        OutputFormat::Pretty => {
            rows(&view).print(ctx.format)?;
            let theme: Theme = prefs.theme();
            println!("{}", view.summary().color(accent_color(theme)));
        }
    }

    Ok(())
}

fn rows(view: &ListView) -> Vec<PokemonDisplay> {
    view.records.iter().map(PokemonDisplay::from).collect()
}
