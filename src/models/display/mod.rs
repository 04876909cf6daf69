//! Display model implementations for table and JSON output
//!
//! Display models transform API records into CLI-friendly rows with
//! column names and serialization.

mod pokemon;
mod types;

pub use pokemon::{PokemonDetail, PokemonDisplay};
pub use types::TypeDisplay;
