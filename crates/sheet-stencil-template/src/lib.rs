//! # sheet-stencil-template
//!
//! Fills spreadsheet templates with data.
//!
//! A template is an ordinary worksheet whose text cells carry markers:
//!
//! - `{{ key }}` is replaced by the scalar `key` of the payload, anywhere in
//!   the cell text
//! - `{{ table.field }}` marks one column of a repeating row; the row is
//!   grown to hold one line per record of the list `table`
//!
//! Growing a table inserts rows, so merged regions below the table are moved
//! with their cells and every new cell gets the style of the template row.
//!
//! ## Example
//!
//! ```rust
//! use sheet_stencil_core::{CellValue, Worksheet};
//! use sheet_stencil_template::{Payload, Renderer};
//!
//! let mut ws = Worksheet::new("Invoice");
//! ws.set_cell_value("A1", "Invoice for {{ customer }}").unwrap();
//! ws.set_cell_value("A3", "{{ items.name }}").unwrap();
//! ws.set_cell_value("B3", "{{ items.qty }}").unwrap();
//! ws.set_cell_value("A4", "Total").unwrap();
//!
//! let payload = Payload::from_json_str(r#"{
//!     "customer": "ACME",
//!     "items": [{"name": "Bolt", "qty": 10}, {"name": "Nut", "qty": 20}]
//! }"#).unwrap();
//!
//! Renderer::new().render(&mut ws, &payload).unwrap();
//!
//! assert_eq!(ws.get_value("A1").unwrap(), CellValue::text("Invoice for ACME"));
//! assert_eq!(ws.get_value("A4").unwrap(), CellValue::text("Nut"));
//! assert_eq!(ws.get_value("A5").unwrap(), CellValue::text("Total"));
//! ```

pub mod codec;
pub mod error;
pub mod expand;
pub mod merge;
pub mod options;
pub mod payload;
pub mod placeholder;
pub mod render;
pub mod scalar;
pub mod style;

pub use codec::{CodecError, DocumentCodec, JsonSnapshotCodec};
pub use error::{ProcessingError, RenderError, RenderResult};
pub use expand::{expand_table, TableExpansion};
pub use merge::{insert_rows_preserving_merges, relocate_region};
pub use options::{RenderOptions, RenderStats, SheetSelection};
pub use payload::{cell_value_from_json, scalar_to_text, Payload, PayloadValue, Record};
pub use placeholder::{
    find_table_placeholders, inspect, parse_table_marker, TablePlaceholders, TemplateSummary,
    SCALAR_PATTERN, TABLE_PATTERN,
};
pub use render::Renderer;
pub use scalar::{substitute_scalars, substitute_worksheet};
pub use style::{copy_cell_style, copy_style};
