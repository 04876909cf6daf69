//! Theme commands

use colored::Colorize;

use crate::catalog::Theme;
use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::output::formatters::accent_color;

/// Print the current theme
pub fn get(opts: &GlobalOptions) -> Result<()> {
    let prefs = CommandContext::new(opts)?.preferences();
    let saved = prefs.saved_theme().is_some();
    print_theme(opts.format, prefs.theme(), saved)
}

/// Save `theme`
pub fn set(opts: &GlobalOptions, theme: Theme) -> Result<()> {
    let prefs = CommandContext::new(opts)?.preferences();
    let saved = prefs.set_theme(theme);
    print_theme(opts.format, theme, saved)
}

/// Switch between light and dark
pub fn toggle(opts: &GlobalOptions) -> Result<()> {
    let prefs = CommandContext::new(opts)?.preferences();
    let theme = prefs.toggle_theme();
    let saved = prefs.saved_theme() == Some(theme);
    print_theme(opts.format, theme, saved)
}

fn print_theme(format: OutputFormat, theme: Theme, saved: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "theme": theme,
                "saved": saved,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Table => println!("{}", theme),
        OutputFormat::Pretty => {
            let note = if saved { "" } else { " (default, not saved)" };
            println!(
                "Theme: {}{}",
                theme.as_str().color(accent_color(theme)).bold(),
                note.dimmed()
            );
        }
    }
    Ok(())
}
