//! Render options and statistics

/// Which worksheets of a workbook get rendered
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SheetSelection {
    /// Every worksheet, in tab order
    #[default]
    All,
    /// The worksheet with this name
    Named(String),
    /// The worksheet at this index (0-based tab position)
    Index(usize),
}

/// Options for rendering a workbook
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Worksheets to render
    pub sheets: SheetSelection,
}

impl RenderOptions {
    /// Render only the named worksheet
    pub fn sheet<S: Into<String>>(mut self, name: S) -> Self {
        self.sheets = SheetSelection::Named(name.into());
        self
    }

    /// Render only the worksheet at `index`
    pub fn sheet_index(mut self, index: usize) -> Self {
        self.sheets = SheetSelection::Index(index);
        self
    }
}

/// Statistics from a render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Worksheets rendered
    pub sheets_rendered: usize,
    /// Text cells changed by scalar substitution
    pub cells_substituted: usize,
    /// Tables expanded
    pub tables_expanded: usize,
    /// Non-empty tables with no markers in the worksheet
    pub tables_skipped: usize,
    /// Rows inserted to make room for records
    pub rows_inserted: u64,
    /// Records written into table rows
    pub records_written: usize,
}

impl RenderStats {
    /// Fold another set of statistics into this one
    pub fn merge(&mut self, other: &RenderStats) {
        self.sheets_rendered += other.sheets_rendered;
        self.cells_substituted += other.cells_substituted;
        self.tables_expanded += other.tables_expanded;
        self.tables_skipped += other.tables_skipped;
        self.rows_inserted += other.rows_inserted;
        self.records_written += other.records_written;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_all() {
        assert_eq!(RenderOptions::default().sheets, SheetSelection::All);
        assert_eq!(
            RenderOptions::default().sheet("Data").sheets,
            SheetSelection::Named("Data".into())
        );
    }

    #[test]
    fn test_stats_merge() {
        let mut total = RenderStats {
            sheets_rendered: 1,
            cells_substituted: 2,
            tables_expanded: 1,
            tables_skipped: 0,
            rows_inserted: 4,
            records_written: 5,
        };
        total.merge(&RenderStats {
            sheets_rendered: 1,
            tables_skipped: 3,
            rows_inserted: 1,
            ..Default::default()
        });

        assert_eq!(total.sheets_rendered, 2);
        assert_eq!(total.tables_skipped, 3);
        assert_eq!(total.rows_inserted, 5);
        assert_eq!(total.records_written, 5);
    }
}
