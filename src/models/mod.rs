//! Display models for CLI output
//!
//! Converts API records into CLI-friendly display formats.

pub mod display;

pub use display::{PokemonDetail, PokemonDisplay, TypeDisplay};
