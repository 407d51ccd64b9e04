//! Placeholder markers and the table placeholder scanner
//!
//! Two marker forms are recognized inside text cells:
//!
//! - `{{ key }}` is a scalar marker, replaced in place by the payload value
//! - `{{ table.field }}` is a table marker, binding `field` of each record of
//!   `table` to the column the marker sits in
//!
//! Whitespace inside the braces is optional. Names are ASCII letters, digits
//! and underscores.

use std::collections::BTreeMap;

use lazy_regex::{lazy_regex, Lazy, Regex};
use sheet_stencil_core::{CellAddress, Worksheet};

/// `{{ key }}`
pub static SCALAR_PATTERN: Lazy<Regex> = lazy_regex!(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}");

/// `{{ table.field }}`
pub static TABLE_PATTERN: Lazy<Regex> =
    lazy_regex!(r"\{\{\s*([A-Za-z0-9_]+)\.([A-Za-z0-9_]+)\s*\}\}");

/// Field name to the cell holding its marker
pub type TablePlaceholders = BTreeMap<String, CellAddress>;

/// The first table marker in `text`, as `(table, field)`
pub fn parse_table_marker(text: &str) -> Option<(&str, &str)> {
    let caps = TABLE_PATTERN.captures(text)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Find every `{{ table.field }}` marker for one table
///
/// Only the first table marker of each cell is considered. When a field
/// appears in several cells, the last one in row-major order wins.
///
/// ```
/// use sheet_stencil_core::{CellAddress, Worksheet};
/// use sheet_stencil_template::find_table_placeholders;
///
/// let mut ws = Worksheet::new("Sheet1");
/// ws.set_cell_value("A5", "{{ items.name }}").unwrap();
/// ws.set_cell_value("B5", "{{items.qty}}").unwrap();
///
/// let found = find_table_placeholders(&ws, "items");
/// assert_eq!(found["name"], CellAddress::new(5, 1));
/// assert_eq!(found["qty"], CellAddress::new(5, 2));
/// ```
pub fn find_table_placeholders(worksheet: &Worksheet, table: &str) -> TablePlaceholders {
    let mut found = TablePlaceholders::new();
    for (row, col, text) in worksheet.text_cells() {
        if let Some((name, field)) = parse_table_marker(text) {
            if name == table {
                found.insert(field.to_string(), CellAddress::new(row, col));
            }
        }
    }
    found
}

/// The markers a worksheet contains
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSummary {
    /// Scalar keys, in order of first appearance
    pub scalars: Vec<String>,
    /// Table name to its field markers
    pub tables: BTreeMap<String, TablePlaceholders>,
}

impl TemplateSummary {
    /// Check whether the worksheet has no markers at all
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty() && self.tables.is_empty()
    }
}

/// Collect every scalar and table marker in a worksheet
pub fn inspect(worksheet: &Worksheet) -> TemplateSummary {
    let mut summary = TemplateSummary::default();

    for (row, col, text) in worksheet.text_cells() {
        for caps in SCALAR_PATTERN.captures_iter(text) {
            let key = &caps[1];
            if !summary.scalars.iter().any(|k| k == key) {
                summary.scalars.push(key.to_string());
            }
        }
        if let Some((table, field)) = parse_table_marker(text) {
            summary
                .tables
                .entry(table.to_string())
                .or_default()
                .insert(field.to_string(), CellAddress::new(row, col));
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sheet(cells: &[(&str, &str)]) -> Worksheet {
        let mut ws = Worksheet::new("Sheet1");
        for (addr, text) in cells {
            ws.set_cell_value(addr, *text).unwrap();
        }
        ws
    }

    #[test]
    fn test_scalar_pattern_whitespace() {
        for text in ["{{name}}", "{{ name }}", "{{   name\t}}"] {
            let caps = SCALAR_PATTERN.captures(text).unwrap();
            assert_eq!(&caps[1], "name");
        }
        assert!(SCALAR_PATTERN.captures("{{ items.name }}").is_none());
        assert!(SCALAR_PATTERN.captures("{{ bad-name }}").is_none());
        assert!(SCALAR_PATTERN.captures("{ name }").is_none());
    }

    #[test]
    fn test_parse_table_marker() {
        assert_eq!(parse_table_marker("{{ items.qty }}"), Some(("items", "qty")));
        assert_eq!(parse_table_marker("Total: {{t.a}} / {{t.b}}"), Some(("t", "a")));
        assert_eq!(parse_table_marker("{{ items }}"), None);
        assert_eq!(parse_table_marker("{{ a.b.c }}"), None);
    }

    #[test]
    fn test_find_table_placeholders_filters_by_table() {
        let ws = sheet(&[
            ("A3", "{{ items.name }}"),
            ("C3", "{{ items.price }}"),
            ("A9", "{{ totals.sum }}"),
            ("B1", "{{ title }}"),
        ]);

        let found = find_table_placeholders(&ws, "items");
        assert_eq!(found.len(), 2);
        assert_eq!(found["name"], CellAddress::new(3, 1));
        assert_eq!(found["price"], CellAddress::new(3, 3));

        assert!(find_table_placeholders(&ws, "missing").is_empty());
    }

    #[test]
    fn test_find_table_placeholders_last_write_wins() {
        let ws = sheet(&[("A2", "{{ t.x }}"), ("D7", "{{ t.x }}")]);
        let found = find_table_placeholders(&ws, "t");
        assert_eq!(found["x"], CellAddress::new(7, 4));
    }

    #[test]
    fn test_find_table_placeholders_ignores_non_text() {
        let mut ws = sheet(&[("A1", "{{ t.a }}")]);
        ws.set_cell_value("B1", 42.0).unwrap();
        ws.set_cell_value("C1", true).unwrap();
        assert_eq!(find_table_placeholders(&ws, "t").len(), 1);
    }

    #[test]
    fn test_inspect() {
        let ws = sheet(&[
            ("A1", "{{ title }} - {{ period }}"),
            ("A2", "{{ title }}"),
            ("A4", "{{ items.name }}"),
            ("B4", "{{ items.qty }}"),
        ]);

        let summary = inspect(&ws);
        assert_eq!(summary.scalars, vec!["title", "period"]);
        assert_eq!(summary.tables.len(), 1);
        assert_eq!(summary.tables["items"]["qty"], CellAddress::new(4, 2));
        assert!(inspect(&Worksheet::new("Blank")).is_empty());
    }
}
