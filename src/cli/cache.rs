//! Cache management commands
//!
//! Unlike the list path, these surface storage errors instead of logging them.

use std::sync::Arc;

use colored::Colorize;
use dialoguer::Confirm;
use log::info;

use crate::cache::keys;
use crate::cache::{LocalStore, RecordCache};
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::{load_config, open_store, storage_dir};
use crate::error::Result;
use crate::output::formatters::{format_age, format_local_time};

/// Show what the cache holds
pub fn status(opts: &GlobalOptions) -> Result<()> {
    let config = load_config(opts)?;
    let store = open_store(&config)?;
    let path = store.path().display().to_string();
    let stats = store.stats()?;

    let store: Arc<dyn LocalStore> = Arc::new(store);
    let mut cache = RecordCache::new(store, config.cache_ttl());
    cache.load_from_storage();

    match opts.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "path": path,
                "entries": stats.entries,
                "total_size_bytes": stats.total_size_bytes,
                "total_size_human": format_size(stats.total_size_bytes),
                "records": cache.len(),
                "fetched_at": cache.fetched_at().map(|t| t.to_rfc3339()),
                "age_secs": cache.age().map(|a| a.as_secs()),
                "ttl_secs": cache.ttl().as_secs(),
                "fresh": cache.is_fresh(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            println!("Cache Status");
            println!("────────────────────────────────────────");
            println!("Location:       {}", path);
            println!("Stored keys:    {}", stats.entries);
            println!("Total size:     {}", format_size(stats.total_size_bytes));
            println!("TTL:            {}", format_age(cache.ttl()));

            match (cache.fetched_at(), cache.age()) {
                (Some(fetched), Some(age)) => {
                    let freshness = if cache.is_fresh() {
                        "fresh".green()
                    } else {
                        "stale".yellow()
                    };
                    println!("Records:        {}", cache.len());
                    println!(
                        "Fetched:        {} ({} ago, {})",
                        format_local_time(fetched),
                        format_age(age),
                        freshness
                    );
                }
                _ => println!("Records:        {}", "none cached".dimmed()),
            }
        }
    }

    Ok(())
}

/// Clear cached records, and with `all` the saved preferences too
pub fn clear(opts: &GlobalOptions, yes: bool, all: bool) -> Result<()> {
    let config = load_config(opts)?;

    if !yes {
        let prompt = if all {
            "Clear cached records and saved preferences?"
        } else {
            "Clear cached records?"
        };
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled");
            return Ok(());
        }
    }

    let store: Arc<dyn LocalStore> = Arc::new(open_store(&config)?);
    let mut removed = 0;

    let mut cache = RecordCache::new(store.clone(), config.cache_ttl());
    if cache.try_clear()? {
        removed += 1;
    }

    if all {
        for key in keys::ALL.iter().filter(|k| **k != keys::RECORDS) {
            if store.remove_item(key)? {
                removed += 1;
            }
        }
    }
    info!("Removed {} stored keys", removed);

    match opts.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "entries_removed": removed,
                "success": true,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        _ => {
            if removed > 0 {
                println!("Cleared {} stored entries", removed);
            } else {
                println!("Cache was already empty");
            }
        }
    }

    Ok(())
}

/// Show the storage directory
pub fn path(opts: &GlobalOptions) -> Result<()> {
    let config = load_config(opts)?;
    println!("{}", storage_dir(&config)?.display());
    Ok(())
}

/// Format bytes as human-readable size
fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
