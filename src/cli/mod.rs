//! CLI command definitions and handlers

use clap::{Args, CommandFactory, Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod cache;
pub mod config;
pub mod context;
pub mod list;
pub mod show;
pub mod theme;
pub mod types;

pub use args::{GlobalOptions, ListArgs, OutputFormat, SortDir};
pub use context::CommandContext;

use crate::catalog::Theme;

/// Pokedex - browse the PokeAPI creature catalog from the terminal
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "POKEDEX_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "POKEDEX_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "POKEDEX_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Bypass the record cache, fetch fresh data from the API
    #[arg(long, global = true, env = "POKEDEX_NO_CACHE", hide_env = true)]
    pub no_cache: bool,

    /// Override the PokeAPI base URL
    #[arg(long, global = true, env = "POKEDEX_API_BASE", hide_env = true)]
    pub api_base: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List Pokémon with search, type filter and sorting
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            pokedex list                              # First page (cached for an hour)\n  \
            pokedex list --more 3                     # Plus three load-more rounds\n  \
            pokedex list -s char                      # Name, type or number contains \"char\"\n  \
            pokedex list -t fire --sort-by attack --sort-dir desc\n  \
            pokedex list --last                       # Repeat the last search\n  \
            pokedex list --format json | jq '.data.records[].name'"
    )]
    List(ListArgs),

    /// Show one Pokémon in detail
    #[command(
        visible_alias = "g",
        after_help = "EXAMPLES:\n  \
            pokedex show pikachu\n  \
            pokedex show 25\n  \
            pokedex show '#025' --shiny\n  \
            pokedex show bulbasaur --format json"
    )]
    Show(ShowArgs),

    /// List every Pokémon type
    Types,

    /// Manage the local record cache
    #[command(subcommand)]
    Cache(CacheCommands),

    /// Get or change the display theme
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(after_help = "\
Install:
  bash:   pokedex completion bash > /etc/bash_completion.d/pokedex
  zsh:    pokedex completion zsh > \"${fpath[1]}/_pokedex\"
  fish:   pokedex completion fish > ~/.config/fish/completions/pokedex.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `show`
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Dex number or name (e.g. 25, #025, pikachu)
    pub reference: String,

    /// Show the shiny sprite URL instead of the official artwork
    #[arg(long)]
    pub shiny: bool,

    /// Skip the species and moves lookups
    #[arg(long)]
    pub brief: bool,
}

/// Cache management subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show what the cache holds and how old it is
    Status,
    /// Clear cached records
    Clear {
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
        /// Also forget the saved theme and last search
        #[arg(long)]
        all: bool,
    },
    /// Print the storage directory path
    Path,
}

/// Theme subcommands
#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Print the current theme
    Get,
    /// Save a theme (light, dark)
    Set {
        /// Theme to use
        theme: Theme,
    },
    /// Switch between light and dark
    Toggle,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Write static completions for `shell` to stdout
pub fn completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::parse_from(["pokedex", "show", "pikachu", "--shiny"]);
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.reference, "pikachu");
                assert!(args.shiny);
                assert!(!args.brief);
            }
            other => panic!("Expected show, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_theme_set() {
        let cli = Cli::parse_from(["pokedex", "theme", "set", "dark"]);
        assert!(matches!(
            cli.command,
            Commands::Theme(ThemeCommands::Set { theme: Theme::Dark })
        ));
    }

    #[test]
    fn test_parse_theme_set_rejects_unknown() {
        assert!(Cli::try_parse_from(["pokedex", "theme", "set", "sepia"]).is_err());
    }

    #[test]
    fn test_parse_cache_clear_flags() {
        let cli = Cli::parse_from(["pokedex", "cache", "clear", "-y", "--all"]);
        assert!(matches!(
            cli.command,
            Commands::Cache(CacheCommands::Clear {
                yes: true,
                all: true
            })
        ));
    }

    #[test]
    fn test_list_alias() {
        let cli = Cli::parse_from(["pokedex", "ls", "--more", "2"]);
        match cli.command {
            Commands::List(args) => assert_eq!(args.more, 2),
            other => panic!("Expected list, got {:?}", other),
        }
    }
}
