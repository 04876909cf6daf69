//! Common CLI types shared across commands

use crate::catalog::SortDirection;

/// Sort direction for list commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum SortDir {
    /// Ascending order
    #[default]
    Asc,
    /// Descending order
    Desc,
}

impl From<SortDir> for SortDirection {
    fn from(dir: SortDir) -> Self {
        match dir {
            SortDir::Asc => SortDirection::Asc,
            SortDir::Desc => SortDirection::Desc,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - colored, human-optimized rendering (global default)
    #[default]
    Pretty,
    /// Table format - plain table, one row per entry
    Table,
    /// JSON format - structured for scripts
    Json,
}
