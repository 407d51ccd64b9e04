//! # sheet-stencil-core
//!
//! Core data structures for the sheet-stencil template renderer.
//!
//! This crate provides the document model that templates are rendered into:
//! - [`CellValue`] - Represents cell values (text, numbers, booleans)
//! - [`CellAddress`] and [`CellRange`] - 1-based cell addressing and ranges
//! - [`Style`] - Cell formatting (fonts, fills, borders, alignment, number formats)
//! - [`Workbook`], [`Worksheet`] - The main document structures
//!
//! Unlike most spreadsheet APIs, rows and columns are **1-based** everywhere:
//! `(1, 1)` is `A1`.
//!
//! ## Example
//!
//! ```rust
//! use sheet_stencil_core::{CellRange, CellValue, Worksheet};
//!
//! let mut sheet = Worksheet::new("Invoice");
//! sheet.set_cell_value("A1", "{{ customer }}").unwrap();
//! sheet.set_cell_value_at(2, 1, 42.0).unwrap();
//! sheet.merge_cells(&CellRange::parse("A1:C1").unwrap()).unwrap();
//!
//! sheet.insert_rows(2, 3).unwrap();
//! assert_eq!(sheet.value_at(5, 1), CellValue::Number(42.0));
//! ```

pub mod cell;
pub mod error;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellAddress, CellData, CellRange, CellValue};
pub use error::{Error, Result};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

// Re-export all style types for convenience
pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderSide, BorderStyle, Color, FillPattern,
    FillStyle, FontStyle, HorizontalAlignment, NumberFormat, Style, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
