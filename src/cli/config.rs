//! Configuration file commands

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::load_config;
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Print the effective configuration (file values plus overrides)
pub fn show(opts: &GlobalOptions) -> Result<()> {
    let config = load_config(opts)?;

    match opts.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        _ => {
            let yaml = serde_yaml::to_string(&config).map_err(ConfigError::from)?;
            print!("{}", yaml);
            if config.storage_dir.is_none() {
                if let Some(dir) = config.storage_dir() {
                    println!("# storage_dir defaults to {}", dir.display());
                }
            }
        }
    }
    Ok(())
}

/// Print the config file path
pub fn path(opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    println!("{}", path.display());
    Ok(())
}

/// Write the default configuration, refusing to overwrite unless forced
pub fn init(opts: &GlobalOptions, force: bool) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    if path.exists() && !force {
        return Err(ConfigError::SaveError(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ))
        .into());
    }

    Config::default().save_to(&path)?;

    println!(
        "{} Configuration saved to: {}",
        "✓".green(),
        path.display()
    );
    Ok(())
}
