//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format rows as a rounded table with centered headers
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct TestRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "NAME")]
        name: String,
        #[tabled(rename = "TYPES")]
        types: String,
    }

    #[test]
    fn test_format_table_empty() {
        let items: Vec<TestRow> = vec![];
        let result = format_table(&items);
        assert_eq!(result, "No results found.");
    }

    fn row(id: &str, name: &str, types: &str) -> TestRow {
        TestRow {
            id: id.to_string(),
            name: name.to_string(),
            types: types.to_string(),
        }
    }

    #[test]
    fn test_format_table_headers_and_cells() {
        let items = vec![row("#025", "Pikachu", "Electric")];

        let result = format_table(&items);

        assert!(result.contains("TYPES"));
        assert!(result.contains("#025"));
        assert!(result.contains("Electric"));
    }

    #[test]
    fn test_format_table_keeps_row_order() {
        let items = vec![row("#004", "Charmander", "Fire"), row("#001", "Bulbasaur", "Grass")];

        let result = format_table(&items);

        let charmander = result.find("Charmander").unwrap();
        let bulbasaur = result.find("Bulbasaur").unwrap();
        assert!(charmander < bulbasaur);
    }

    #[test]
    fn test_format_table_uses_rounded_style() {
        let items = vec![row("#001", "Bulbasaur", "Grass, Poison")];

        let result = format_table(&items);

        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
