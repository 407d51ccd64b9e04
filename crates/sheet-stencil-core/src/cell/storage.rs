//! Cell storage implementation
//!
//! Sparse storage for worksheet cells. Only materialized cells are stored,
//! using a row-based BTreeMap structure so iteration is always row-major.

use std::collections::BTreeMap;

use super::CellValue;
use crate::style::Style;

/// Complete data for a single cell
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellData {
    /// The cell's value
    pub value: CellValue,
    /// The cell's style bundle, owned by this cell
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Style::is_default"))]
    pub style: Style,
}

impl CellData {
    /// Check if this cell is effectively empty (no value and default style)
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.style.is_default()
    }
}

/// Sparse row-based storage for worksheet cells
///
/// Structure: `BTreeMap<row, BTreeMap<col, CellData>>`, both keys 1-based.
///
/// Cells are kept once materialized, even when empty: a merged region needs
/// backing cells at its corners, and [`CellStorage::ensure`] creates them.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStorage {
    /// Row → column map
    rows: BTreeMap<u32, BTreeMap<u16, CellData>>,

    /// Custom row heights in points
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "BTreeMap::is_empty"))]
    row_heights: BTreeMap<u32, f64>,
}

impl CellStorage {
    /// Create a new empty cell storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell
    pub fn get(&self, row: u32, col: u16) -> Option<&CellData> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Get a cell, creating an empty one if it does not exist yet
    pub fn ensure(&mut self, row: u32, col: u16) -> &mut CellData {
        self.rows.entry(row).or_default().entry(col).or_default()
    }

    /// Set just the cell value (preserving style)
    pub fn set_value(&mut self, row: u32, col: u16, value: CellValue) {
        self.ensure(row, col).value = value;
    }

    /// Set just the cell style (preserving value)
    pub fn set_style(&mut self, row: u32, col: u16, style: Style) {
        self.ensure(row, col).style = style;
    }

    /// Number of materialized cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the bounds of materialized cells
    ///
    /// Returns (min_row, min_col, max_row, max_col) or None if empty
    pub fn used_bounds(&self) -> Option<(u32, u16, u32, u16)> {
        let min_row = *self.rows.keys().next()?;
        let max_row = *self.rows.keys().next_back()?;

        let mut min_col = u16::MAX;
        let mut max_col = 0u16;

        for row_data in self.rows.values() {
            if let Some(&col) = row_data.keys().next() {
                min_col = min_col.min(col);
            }
            if let Some(&col) = row_data.keys().next_back() {
                max_col = max_col.max(col);
            }
        }

        Some((min_row, min_col, max_row, max_col))
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |(&col, data)| (row, col, data)))
    }

    /// Iterate mutably over all cells in row-major order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (u32, u16, &mut CellData)> {
        self.rows.iter_mut().flat_map(|(&row, cols)| {
            cols.iter_mut()
                .map(move |(&col, data)| (row, col, data))
        })
    }

    /// Insert `count` empty rows before `at`
    ///
    /// Every row numbered `at` or greater moves down by `count`, together with
    /// its custom height. The inserted rows hold no cells.
    pub fn insert_rows(&mut self, at: u32, count: u32) {
        if count == 0 {
            return;
        }

        let moved = self.rows.split_off(&at);
        self.rows
            .extend(moved.into_iter().map(|(row, cols)| (row + count, cols)));

        let moved_heights = self.row_heights.split_off(&at);
        self.row_heights.extend(
            moved_heights
                .into_iter()
                .map(|(row, height)| (row + count, height)),
        );
    }

    /// Get a custom row height, if one is set
    pub fn row_height(&self, row: u32) -> Option<f64> {
        self.row_heights.get(&row).copied()
    }

    /// Set a custom row height
    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_heights.insert(row, height);
    }

    /// Highest row carrying content: a cell or a custom height
    pub fn last_row(&self) -> Option<u32> {
        let cells = self.rows.keys().next_back().copied();
        let heights = self.row_heights.keys().next_back().copied();
        cells.max(heights)
    }

    /// Iterate over custom row heights in row order
    pub fn row_heights(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.row_heights.iter().map(|(&row, &height)| (row, height))
    }
}
