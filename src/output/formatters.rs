//! Reusable formatting utilities for CLI output
//!
//! Display helpers for ids, measurements, stats, types and timestamps used
//! by the list, show and cache commands.

use std::time::Duration;

use chrono::{DateTime, Utc};
use colored::{Color, ColoredString, Colorize};

use crate::catalog::Theme;
use crate::client::models::SPRITES_BASE_URL;

/// Maximum base stat value
pub const MAX_STAT: u16 = 255;

/// National dex ranges per generation
const GENERATIONS: [(&str, u32, u32); 9] = [
    ("Generation I", 1, 151),
    ("Generation II", 152, 251),
    ("Generation III", 252, 386),
    ("Generation IV", 387, 493),
    ("Generation V", 494, 649),
    ("Generation VI", 650, 721),
    ("Generation VII", 722, 809),
    ("Generation VIII", 810, 898),
    ("Generation IX", 899, 1025),
];

/// Upper-case the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Dex number padded to three digits.
///
/// # Example output
/// `#001`, `#025`, `#1025`, `#???` for 0
pub fn format_id(id: u32) -> String {
    if id == 0 {
        return "#???".to_string();
    }
    format!("#{:03}", id)
}

/// Decimeters to meters, e.g. `"0.7 m"`
pub fn format_height(decimeters: u32) -> String {
    format!("{:.1} m", f64::from(decimeters) / 10.0)
}

/// Hectograms to kilograms, e.g. `"6.9 kg"`
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", f64::from(hectograms) / 10.0)
}

/// Sprite variant for `image_url`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageVariant {
    #[default]
    OfficialArtwork,
    Shiny,
}

/// Constructed sprite URL; empty for id 0
pub fn image_url(id: u32, variant: ImageVariant) -> String {
    if id == 0 {
        return String::new();
    }
    match variant {
        ImageVariant::Shiny => format!("{}/shiny/{}.png", SPRITES_BASE_URL, id),
        ImageVariant::OfficialArtwork => {
            format!("{}/other/official-artwork/{}.png", SPRITES_BASE_URL, id)
        }
    }
}

/// Share of the maximum base stat, capped at 100
pub fn stat_percentage(value: u16) -> f64 {
    (f64::from(value) / f64::from(MAX_STAT) * 100.0).min(100.0)
}

/// Bar color for a stat value
pub fn stat_color(value: u16) -> Color {
    match value {
        100.. => Color::Green,
        75..=99 => Color::Blue,
        50..=74 => Color::Yellow,
        25..=49 => Color::TrueColor {
            r: 0xF9,
            g: 0x73,
            b: 0x16,
        },
        _ => Color::Red,
    }
}

/// Horizontal bar `width` cells wide, filled in proportion to the stat
pub fn stat_bar(value: u16, width: usize) -> String {
    let filled = ((stat_percentage(value) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Short label for a stat name (`special-attack` -> `Sp. Atk`)
pub fn stat_label(name: &str) -> String {
    match name {
        "hp" => "HP".to_string(),
        "attack" => "Attack".to_string(),
        "defense" => "Defense".to_string(),
        "special-attack" => "Sp. Atk".to_string(),
        "special-defense" => "Sp. Def".to_string(),
        "speed" => "Speed".to_string(),
        other => format_ability(other),
    }
}

/// Cut `text` to `max_len` characters, appending `...` when shortened
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{}...", cut)
}

pub fn format_type(type_name: &str) -> String {
    capitalize(type_name)
}

/// Hyphenated name to title case (`solar-power` -> `Solar Power`)
pub fn format_ability(name: &str) -> String {
    name.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generation name for a dex number, `"Unknown"` outside the known ranges
pub fn generation(id: u32) -> &'static str {
    GENERATIONS
        .iter()
        .find(|(_, start, end)| (*start..=*end).contains(&id))
        .map(|(name, _, _)| *name)
        .unwrap_or("Unknown")
}

/// Badge colors for a type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeColor {
    pub background: Color,
    pub foreground: Color,
}

const fn rgb(hex: u32) -> Color {
    Color::TrueColor {
        r: ((hex >> 16) & 0xFF) as u8,
        g: ((hex >> 8) & 0xFF) as u8,
        b: (hex & 0xFF) as u8,
    }
}

const DARK_TEXT: Color = rgb(0x333333);

/// Palette entry for a type, falling back to `normal`
pub fn type_color(type_name: &str) -> TypeColor {
    let (background, foreground) = match type_name {
        "fire" => (rgb(0xF08030), Color::White),
        "water" => (rgb(0x6890F0), Color::White),
        "grass" => (rgb(0x78C850), Color::White),
        "electric" => (rgb(0xF8D030), DARK_TEXT),
        "ice" => (rgb(0x98D8D8), DARK_TEXT),
        "fighting" => (rgb(0xC03028), Color::White),
        "poison" => (rgb(0xA040A0), Color::White),
        "ground" => (rgb(0xE0C068), DARK_TEXT),
        "flying" => (rgb(0xA890F0), Color::White),
        "psychic" => (rgb(0xF85888), Color::White),
        "bug" => (rgb(0xA8B820), Color::White),
        "rock" => (rgb(0xB8A038), Color::White),
        "ghost" => (rgb(0x705898), Color::White),
        "dark" => (rgb(0x705848), Color::White),
        "dragon" => (rgb(0x7038F8), Color::White),
        "steel" => (rgb(0xB8B8D0), DARK_TEXT),
        "fairy" => (rgb(0xEE99AC), DARK_TEXT),
        _ => (rgb(0xA8A878), Color::White),
    };
    TypeColor {
        background,
        foreground,
    }
}

/// Type name rendered as a colored badge
pub fn type_badge(type_name: &str) -> ColoredString {
    let color = type_color(type_name);
    format!(" {} ", format_type(type_name))
        .color(color.foreground)
        .on_color(color.background)
}

/// Heading color for the active theme
pub fn accent_color(theme: Theme) -> Color {
    match theme {
        Theme::Light => Color::Blue,
        Theme::Dark => Color::BrightCyan,
    }
}

/// UTC timestamp in local time.
///
/// # Example output
/// `01/15/2025 14:30`
pub fn format_local_time(time: DateTime<Utc>) -> String {
    time.with_timezone(&chrono::Local)
        .format("%m/%d/%Y %H:%M")
        .to_string()
}

/// Duration as a human-readable string.
///
/// # Example output
/// - `2h 15m 30s` (hours, minutes, seconds)
/// - `5m 10s` (minutes, seconds)
/// - `45s` (seconds only)
pub fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pikachu"), "Pikachu");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éevee"), "Éevee");
    }

    #[test]
    fn test_format_id() {
        assert_eq!(format_id(1), "#001");
        assert_eq!(format_id(25), "#025");
        assert_eq!(format_id(1025), "#1025");
        assert_eq!(format_id(0), "#???");
    }

    #[test]
    fn test_format_height_weight() {
        assert_eq!(format_height(7), "0.7 m");
        assert_eq!(format_height(0), "0.0 m");
        assert_eq!(format_weight(69), "6.9 kg");
        assert_eq!(format_weight(9999), "999.9 kg");
    }

    #[test]
    fn test_image_url_variants() {
        assert_eq!(
            image_url(25, ImageVariant::OfficialArtwork),
            format!("{}/other/official-artwork/25.png", SPRITES_BASE_URL)
        );
        assert_eq!(
            image_url(25, ImageVariant::Shiny),
            format!("{}/shiny/25.png", SPRITES_BASE_URL)
        );
        assert_eq!(image_url(0, ImageVariant::Shiny), "");
    }

    #[test]
    fn test_stat_percentage_capped() {
        assert_eq!(stat_percentage(0), 0.0);
        assert_eq!(stat_percentage(255), 100.0);
        assert!((stat_percentage(51) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_stat_color_thresholds() {
        assert_eq!(stat_color(150), Color::Green);
        assert_eq!(stat_color(100), Color::Green);
        assert_eq!(stat_color(99), Color::Blue);
        assert_eq!(stat_color(75), Color::Blue);
        assert_eq!(stat_color(50), Color::Yellow);
        assert!(matches!(stat_color(25), Color::TrueColor { .. }));
        assert_eq!(stat_color(24), Color::Red);
    }

    #[test]
    fn test_stat_bar() {
        assert_eq!(stat_bar(255, 10), "██████████");
        assert_eq!(stat_bar(0, 4), "░░░░");
        assert_eq!(stat_bar(51, 10).chars().filter(|c| *c == '█').count(), 2);
    }

    #[test]
    fn test_stat_label() {
        assert_eq!(stat_label("hp"), "HP");
        assert_eq!(stat_label("special-attack"), "Sp. Atk");
        assert_eq!(stat_label("special-defense"), "Sp. Def");
        assert_eq!(stat_label("accuracy"), "Accuracy");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a longer sentence", 8), "a longer...");
        assert_eq!(truncate_text("", 3), "");
    }

    #[test]
    fn test_format_ability() {
        assert_eq!(format_ability("solar-power"), "Solar Power");
        assert_eq!(format_ability("static"), "Static");
    }

    #[test]
    fn test_generation_ranges() {
        assert_eq!(generation(1), "Generation I");
        assert_eq!(generation(151), "Generation I");
        assert_eq!(generation(152), "Generation II");
        assert_eq!(generation(898), "Generation VIII");
        assert_eq!(generation(1025), "Generation IX");
        assert_eq!(generation(0), "Unknown");
        assert_eq!(generation(10_001), "Unknown");
    }

    #[test]
    fn test_type_color_fallback() {
        assert_eq!(type_color("shadow"), type_color("normal"));
        assert_eq!(type_color("fire").background, rgb(0xF08030));
        assert_eq!(type_color("electric").foreground, DARK_TEXT);
    }

    #[test]
    fn test_accent_color_follows_theme() {
        assert_ne!(accent_color(Theme::Light), accent_color(Theme::Dark));
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(Duration::from_secs(3661)), "1h 1m 1s");
        assert_eq!(format_age(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_age(Duration::from_secs(0)), "0s");
    }

    #[test]
    fn test_format_local_time() {
        let time = DateTime::from_timestamp(1_736_942_400, 0).unwrap();
        // Exact text depends on the local zone
        assert!(format_local_time(time).contains("2025"));
    }
}
