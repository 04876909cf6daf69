//! Shared CLI argument types
//!
//! Reusable argument structs that can be flattened into commands using
//! `#[command(flatten)]`.

mod common;
mod filters;
mod global;

pub use common::{OutputFormat, SortDir};
pub use filters::ListArgs;
pub use global::GlobalOptions;
