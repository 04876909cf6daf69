//! Pokedex - terminal catalog browser for the PokeAPI creature database

use clap::Parser;

mod cache;
mod catalog;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{CacheCommands, Cli, Commands, ConfigCommands, GlobalOptions, ThemeCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::List(args) => cli::list::run(&opts, &args).await,
        Commands::Show(args) => cli::show::run(&opts, &args).await,
        Commands::Types => cli::types::run(&opts).await,
        Commands::Cache(cache_cmd) => match cache_cmd {
            CacheCommands::Status => cli::cache::status(&opts),
            CacheCommands::Clear { yes, all } => cli::cache::clear(&opts, yes, all),
            CacheCommands::Path => cli::cache::path(&opts),
        },
        Commands::Theme(theme_cmd) => match theme_cmd {
            ThemeCommands::Get => cli::theme::get(&opts),
            ThemeCommands::Set { theme } => cli::theme::set(&opts, theme),
            ThemeCommands::Toggle => cli::theme::toggle(&opts),
        },
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Show => cli::config::show(&opts),
            ConfigCommands::Path => cli::config::path(&opts),
            ConfigCommands::Init { force } => cli::config::init(&opts, force),
        },
        Commands::Completion { shell } => {
            cli::completion(shell);
            Ok(())
        }
    }
}

/// Log to stderr at `warn`, or `debug` with `--debug`; `RUST_LOG` wins over both
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
