//! # sheet-stencil
//!
//! Render data-driven spreadsheets from placeholder templates.
//!
//! ## Features
//!
//! - Scalar markers (`{{ name }}`) substituted anywhere in cell text
//! - Table markers (`{{ items.qty }}`) grown into one row per record
//! - Merged regions below a table move with their cells
//! - New table cells take the style of the template row
//! - Template directories addressed by code ([`TemplateCatalog`])
//!
//! ## Example
//!
//! ```rust
//! use sheet_stencil::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let sheet = workbook.worksheet_mut(0).unwrap();
//! sheet.set_cell_value("A1", "Statement for {{ holder }}").unwrap();
//! sheet.set_cell_value("A3", "{{ lines.date }}").unwrap();
//! sheet.set_cell_value("B3", "{{ lines.amount }}").unwrap();
//!
//! let payload = Payload::from_json_str(r#"{
//!     "holder": "Jane Doe",
//!     "lines": [
//!         {"date": "2024-01-02", "amount": -12.5},
//!         {"date": "2024-01-05", "amount": 300}
//!     ]
//! }"#).unwrap();
//!
//! let stats = workbook.render(&payload).unwrap();
//! assert_eq!(stats.rows_inserted, 1);
//!
//! let sheet = workbook.worksheet(0).unwrap();
//! assert_eq!(sheet.get_value("B4").unwrap(), CellValue::Number(300.0));
//!
//! // Save to file
//! // workbook.save("statement.json").unwrap();
//! ```

pub mod catalog;
pub mod prelude;

pub use catalog::{TemplateCatalog, TemplateEntry};

// Re-export core types
pub use sheet_stencil_core::{
    Alignment,
    BorderEdge,
    BorderLineStyle,
    BorderSide,
    BorderStyle,
    CellAddress,
    CellData,
    CellRange,
    // Cell types
    CellValue,
    Color,
    // Error types
    Error,
    FillPattern,
    FillStyle,
    FontStyle,
    HorizontalAlignment,
    NumberFormat,
    Result,

    // Style types
    Style,
    VerticalAlignment,
    // Main types
    Workbook,
    Worksheet,

    MAX_COLS,
    // Constants
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

// Re-export rendering types
pub use sheet_stencil_template::{
    inspect, CodecError, DocumentCodec, JsonSnapshotCodec, Payload, PayloadValue,
    ProcessingError, RenderError, RenderOptions, RenderResult, RenderStats, Renderer,
    SheetSelection, TablePlaceholders, TemplateSummary,
};

use std::path::Path;

/// Extension trait for Workbook to add file I/O
///
/// Files are JSON snapshots of the document model.
pub trait WorkbookExt {
    /// Open a workbook from a file
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook>;

    /// Save the workbook to a file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook> {
        let path = path.as_ref();
        check_extension(path)?;

        let bytes = std::fs::read(path)
            .map_err(|e| Error::other(format!("{}: {}", path.display(), e)))?;
        JsonSnapshotCodec::new()
            .load(&bytes)
            .map_err(|e| Error::other(e.to_string()))
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        check_extension(path)?;

        let bytes = JsonSnapshotCodec::pretty()
            .save(self)
            .map_err(|e| Error::other(e.to_string()))?;
        std::fs::write(path, bytes).map_err(|e| Error::other(format!("{}: {}", path.display(), e)))
    }
}

fn check_extension(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("json") => Ok(()),
        _ => Err(Error::other(format!(
            "Unsupported file format: {}",
            path.display()
        ))),
    }
}

/// Extension trait for Workbook to add template rendering
pub trait WorkbookRenderExt {
    /// Render a payload into every worksheet
    fn render(&mut self, payload: &Payload) -> RenderResult<RenderStats>;

    /// Render a payload with custom options
    fn render_with_options(
        &mut self,
        payload: &Payload,
        options: &RenderOptions,
    ) -> RenderResult<RenderStats>;
}

impl WorkbookRenderExt for Workbook {
    fn render(&mut self, payload: &Payload) -> RenderResult<RenderStats> {
        self.render_with_options(payload, &RenderOptions::default())
    }

    fn render_with_options(
        &mut self,
        payload: &Payload,
        options: &RenderOptions,
    ) -> RenderResult<RenderStats> {
        Renderer::with_options(options.clone()).render_workbook(self, payload)
    }
}
