//! Show command: one record with species, abilities, moves and stats

use colored::{Color, Colorize};
use log::{debug, warn};

use crate::catalog::Theme;
use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, ShowArgs};
use crate::client::models::Reference;
use crate::client::{PokeApi, Species};
use crate::error::{Error, Result};
use crate::models::PokemonDetail;
use crate::output::Formattable;
use crate::output::formatters::{
    ImageVariant, accent_color, capitalize, format_ability, format_height, format_id,
    format_weight, image_url, stat_bar, stat_color, stat_label, truncate_text, type_badge,
};
use crate::output::json::format_json;
use crate::output::progress::spinner;

const STAT_BAR_WIDTH: usize = 25;
const FLAVOR_TEXT_MAX: usize = 200;

/// Run the show command
pub async fn run(opts: &GlobalOptions, args: &ShowArgs) -> Result<()> {
    let reference: Reference = args.reference.parse()?;
    let ctx = CommandContext::new(opts)?;

    let progress = spinner(ctx.format, &format!("Fetching {}...", reference));
    let detail = fetch_detail(ctx.client.as_ref(), &reference, args.brief).await;
    progress.finish_and_clear();
    let mut detail = detail?;

    if args.shiny {
        detail.image_url = image_url(detail.pokemon.id, ImageVariant::Shiny);
    }

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&detail)?),
        OutputFormat::Table => detail.fields().print(ctx.format)?,
        OutputFormat::Pretty => print_pretty(&detail, ctx.preferences().theme()),
    }

    Ok(())
}

/// Fetch the record, then its species and moves side by side.
///
/// Only the record lookup is fatal; a failed species or moves lookup leaves
/// that section out.
pub async fn fetch_detail<C: PokeApi + ?Sized>(
    client: &C,
    reference: &Reference,
    brief: bool,
) -> Result<PokemonDetail> {
    let pokemon = client.fetch_detail(reference).await?;
    if brief {
        return Ok(PokemonDetail::new(pokemon, None, Vec::new()));
    }

    let (species, moves) = tokio::join!(
        client.fetch_species(pokemon.id),
        client.fetch_moves(pokemon.id)
    );

    let species = match species {
        Ok(species) => Some(species),
        Err(Error::Api(e)) if e.is_not_found() => {
            debug!("No species entry for {}", pokemon.id);
            None
        }
        Err(e) => {
            warn!("Could not fetch species for {}: {}", pokemon.name, e);
            None
        }
    };
    let moves = moves.unwrap_or_else(|e| {
        warn!("Could not fetch moves for {}: {}", pokemon.name, e);
        Vec::new()
    });

    Ok(PokemonDetail::new(pokemon, species, moves))
}

fn print_pretty(detail: &PokemonDetail, theme: Theme) {
    let accent = accent_color(theme);
    let p = &detail.pokemon;

    let badges: Vec<String> = p.types.iter().map(|t| type_badge(t).to_string()).collect();
    println!(
        "{} {}  {}",
        format_id(p.id).dimmed(),
        capitalize(&p.name).bold(),
        badges.join(" ")
    );

    let mut subtitle = vec![detail.generation.clone()];
    if let Some(species) = &detail.species {
        if let Some(genus) = &species.genus {
            subtitle.insert(0, genus.clone());
        }
        subtitle.extend(species_tags(species));
    }
    println!("{}", subtitle.join(" · ").dimmed());

    if let Some(text) = detail.species.as_ref().and_then(|s| s.flavor_text.as_ref()) {
        println!("\n{}", truncate_text(text, FLAVOR_TEXT_MAX).italic());
    }

    println!(
        "\n{}  {}    {}  {}",
        "Height".color(accent).bold(),
        format_height(p.height),
        "Weight".color(accent).bold(),
        format_weight(p.weight)
    );

    println!("\n{}", "Base stats".color(accent).bold());
    for stat in &p.stats {
        println!(
            "  {:<8} {:>3} {}",
            stat_label(&stat.name),
            stat.value,
            stat_bar(stat.value, STAT_BAR_WIDTH).color(stat_color(stat.value))
        );
    }
    println!(
        "  {:<8} {:>3}",
        "Total".bold(),
        p.base_stat_total().to_string().bold()
    );

    let abilities: Vec<String> = p
        .abilities
        .iter()
        .map(|a| {
            if a.is_hidden {
                format!("{} {}", format_ability(&a.name), "(hidden)".dimmed())
            } else {
                format_ability(&a.name)
            }
        })
        .collect();
    println!(
        "\n{} {}",
        "Abilities:".color(accent).bold(),
        abilities.join(", ")
    );

    if !detail.moves.is_empty() {
        let moves: Vec<String> = detail.moves.iter().map(|m| format_ability(m)).collect();
        println!("{} {}", "Moves:".color(accent).bold(), moves.join(", "));
    }

    println!(
        "{} {}",
        "Image:".color(accent).bold(),
        detail.image_url.color(Color::BrightBlack)
    );
}

fn species_tags(species: &Species) -> Vec<String> {
    let mut tags = Vec::new();
    if species.is_legendary {
        tags.push("Legendary".to_string());
    }
    if species.is_mythical {
        tags.push("Mythical".to_string());
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockPokeApi;
    use crate::error::ApiError;
    use crate::client::fixtures::{species, starter_trio};

    #[tokio::test]
    async fn test_fetch_detail_with_species_and_moves() {
        let mock = MockPokeApi::new()
            .with_pokemon(starter_trio())
            .await
            .with_species(vec![species(25, "pikachu")])
            .await
            .with_moves(vec!["thunder-shock".to_string()])
            .await;

        let detail = fetch_detail(&mock, &Reference::Name("Pikachu".to_string()), false)
            .await
            .unwrap();

        assert_eq!(detail.pokemon.id, 25);
        assert_eq!(detail.species.unwrap().name, "pikachu");
        assert_eq!(detail.moves, vec!["thunder-shock".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_detail_missing_species_is_not_fatal() {
        let mock = MockPokeApi::new().with_pokemon(starter_trio()).await;

        let detail = fetch_detail(&mock, &Reference::Id(4), false).await.unwrap();

        assert_eq!(detail.pokemon.name, "charmander");
        assert!(detail.species.is_none());
    }

    #[tokio::test]
    async fn test_fetch_detail_not_found() {
        let mock = MockPokeApi::new().with_pokemon(starter_trio()).await;

        let err = fetch_detail(&mock, &Reference::Id(999), false)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_fetch_detail_brief_skips_lookups() {
        let mock = MockPokeApi::new().with_pokemon(starter_trio()).await;

        fetch_detail(&mock, &Reference::Id(1), true).await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.fetch_detail, 1);
        assert_eq!(counts.fetch_species, 0);
        assert_eq!(counts.fetch_moves, 0);
    }

    #[test]
    fn test_species_tags() {
        let mut entry = species(151, "mew");
        entry.is_mythical = true;
        assert_eq!(species_tags(&entry), vec!["Mythical".to_string()]);
    }
}
