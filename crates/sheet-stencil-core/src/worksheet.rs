//! Worksheet type

use crate::cell::{CellAddress, CellData, CellRange, CellStorage, CellValue};
use crate::error::{Error, Result};
use crate::style::Style;
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Cell storage
    cells: CellStorage,
    /// Merged cell regions, in declaration order
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    merged_regions: Vec<CellRange>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
            merged_regions: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Cell Access ===

    /// Get a cell by row and column (1-based)
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellData> {
        self.cells.get(row, col)
    }

    /// Get a cell, materializing an empty one if none is stored there
    pub fn ensure_cell_at(&mut self, row: u32, col: u16) -> Result<&mut CellData> {
        validate_cell_position(row, col)?;
        Ok(self.cells.ensure(row, col))
    }

    /// Get cell value by address string
    pub fn get_value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.value_at(addr.row, addr.col))
    }

    /// Get cell value by row and column
    pub fn value_at(&self, row: u32, col: u16) -> CellValue {
        self.cells
            .get(row, col)
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    /// Get the style of a cell, if the cell exists
    pub fn style_at(&self, row: u32, col: u16) -> Option<&Style> {
        self.cells.get(row, col).map(|c| &c.style)
    }

    /// Get a mutable style, materializing the cell if needed
    pub fn style_at_mut(&mut self, row: u32, col: u16) -> Result<&mut Style> {
        Ok(&mut self.ensure_cell_at(row, col)?.style)
    }

    // === Cell Modification ===

    /// Set a cell value by address string
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Set a cell value by row and column (preserves the cell's style)
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        validate_cell_position(row, col)?;
        self.cells.set_value(row, col, value.into());
        Ok(())
    }

    /// Set a cell style by address string
    pub fn set_cell_style(&mut self, address: &str, style: &Style) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_style_at(addr.row, addr.col, style)
    }

    /// Set a cell style by row and column (preserves the cell's value)
    pub fn set_cell_style_at(&mut self, row: u32, col: u16, style: &Style) -> Result<()> {
        validate_cell_position(row, col)?;
        self.cells.set_style(row, col, style.clone());
        Ok(())
    }

    // === Iteration ===

    /// Number of materialized cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Check if the worksheet has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all materialized cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.cells.iter()
    }

    /// Iterate mutably over all materialized cells in row-major order
    pub fn iter_cells_mut(&mut self) -> impl Iterator<Item = (u32, u16, &mut CellData)> {
        self.cells.iter_mut()
    }

    /// Iterate over text-valued cells in row-major order
    pub fn text_cells(&self) -> impl Iterator<Item = (u32, u16, &str)> {
        self.cells
            .iter()
            .filter_map(|(row, col, cell)| cell.value.as_text().map(|text| (row, col, text)))
    }

    /// Get the used range (bounds of all materialized cells)
    pub fn used_range(&self) -> Option<CellRange> {
        self.cells
            .used_bounds()
            .map(|(min_row, min_col, max_row, max_col)| {
                CellRange::from_indices(min_row, min_col, max_row, max_col)
            })
    }

    // === Row Operations ===

    /// Get the custom row height, if one is set
    pub fn row_height(&self, row: u32) -> Option<f64> {
        self.cells.row_height(row)
    }

    /// Set row height in points
    pub fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
        if row == 0 || row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }
        self.cells.set_row_height(row, height);
        Ok(())
    }

    /// Iterate over custom row heights in row order
    pub fn row_heights(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.cells.row_heights()
    }

    /// Insert `count` empty rows before row `at`
    ///
    /// Cells and row heights at or below `at` move down by `count`; fails
    /// without moving anything if either would pass the last row. Merged
    /// regions are left where they are; callers that need merges to follow
    /// the cells must re-declare them.
    pub fn insert_rows(&mut self, at: u32, count: u32) -> Result<()> {
        if at == 0 || at > MAX_ROWS {
            return Err(Error::RowOutOfBounds(at, MAX_ROWS));
        }
        if count == 0 {
            return Ok(());
        }

        if let Some(last_row) = self.cells.last_row() {
            if last_row >= at && last_row as u64 + count as u64 > MAX_ROWS as u64 {
                return Err(Error::RowOutOfBounds(
                    last_row.saturating_add(count),
                    MAX_ROWS,
                ));
            }
        }

        self.cells.insert_rows(at, count);
        Ok(())
    }

    // === Merged Cells ===

    /// Get merged regions
    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged_regions
    }

    /// Merge cells
    ///
    /// Fails if the range overlaps an existing merged region or lies outside
    /// the sheet.
    pub fn merge_cells(&mut self, range: &CellRange) -> Result<()> {
        validate_cell_position(range.start.row, range.start.col)?;
        validate_cell_position(range.end.row, range.end.col)?;

        if let Some(existing) = self.merged_regions.iter().find(|r| r.overlaps(range)) {
            return Err(Error::MergedCellConflict(format!(
                "{} (conflicts with {})",
                range, existing
            )));
        }
        self.merged_regions.push(*range);
        Ok(())
    }

    /// Unmerge cells
    ///
    /// Returns `false` when no region equal to `range` is declared.
    pub fn unmerge_cells(&mut self, range: &CellRange) -> bool {
        match self.merged_regions.iter().position(|r| r == range) {
            Some(i) => {
                self.merged_regions.remove(i);
                true
            }
            None => false,
        }
    }
}

fn validate_cell_position(row: u32, col: u16) -> Result<()> {
    if row == 0 || row > MAX_ROWS {
        return Err(Error::RowOutOfBounds(row, MAX_ROWS));
    }
    if col == 0 || col > MAX_COLS {
        return Err(Error::ColumnOutOfBounds(col, MAX_COLS));
    }
    Ok(())
}
