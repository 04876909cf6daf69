//! Global CLI options shared across all commands
//!
//! Collects the global flags once so handlers take a single argument.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.pokedex/config.yaml)
    pub config: Option<String>,

    /// Skip the record cache for this run
    pub no_cache: bool,

    /// PokeAPI base URL override
    pub api_base: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            no_cache: cli.no_cache,
            api_base: cli.api_base.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API base override as `Option<&str>`.
    pub fn api_base_ref(&self) -> Option<&str> {
        self.api_base.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_global_options_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Json,
            config: Some("/custom/path".to_string()),
            no_cache: true,
            api_base: Some("http://localhost:8080".to_string()),
        };

        assert_eq!(opts.config_ref(), Some("/custom/path"));
        assert_eq!(opts.api_base_ref(), Some("http://localhost:8080"));
        assert!(opts.no_cache);
    }

    #[test]
    fn test_from_cli_defaults() {
        let cli = Cli::parse_from(["pokedex", "types"]);
        let opts = GlobalOptions::from_cli(&cli);

        assert_eq!(opts.format, OutputFormat::Pretty);
        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.api_base_ref(), None);
        assert!(!opts.no_cache);
    }

    #[test]
    fn test_from_cli_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "pokedex",
            "list",
            "--format",
            "json",
            "--no-cache",
            "--api-base",
            "http://localhost:1234",
        ]);
        let opts = GlobalOptions::from_cli(&cli);

        assert_eq!(opts.format, OutputFormat::Json);
        assert!(opts.no_cache);
        assert_eq!(opts.api_base_ref(), Some("http://localhost:1234"));
    }
}
