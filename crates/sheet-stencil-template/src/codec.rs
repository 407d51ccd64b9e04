//! Loading and saving documents
//!
//! The renderer never touches container formats itself. A [`DocumentCodec`]
//! turns bytes into a [`Workbook`] and back; [`JsonSnapshotCodec`] is the
//! built-in implementation, a JSON serialization of the document model.

use sheet_stencil_core::{CellRange, Workbook, MAX_COLS, MAX_ROWS};
use thiserror::Error;

/// Errors from a [`DocumentCodec`]
#[derive(Debug, Error)]
pub enum CodecError {
    /// Snapshot JSON could not be read or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bytes decoded, but do not describe a valid document
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

/// Converts between document bytes and the in-memory model
pub trait DocumentCodec {
    /// Load a workbook from bytes
    fn load(&self, bytes: &[u8]) -> Result<Workbook, CodecError>;

    /// Save a workbook to bytes
    fn save(&self, workbook: &Workbook) -> Result<Vec<u8>, CodecError>;
}

/// JSON snapshot of a workbook
///
/// Round-trips values, styles, row heights and merged regions exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSnapshotCodec {
    pretty: bool,
}

impl JsonSnapshotCodec {
    /// Create a codec that writes compact JSON
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec that writes indented JSON
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl DocumentCodec for JsonSnapshotCodec {
    fn load(&self, bytes: &[u8]) -> Result<Workbook, CodecError> {
        let workbook: Workbook = serde_json::from_slice(bytes)?;
        validate_workbook(&workbook)?;
        Ok(workbook)
    }

    fn save(&self, workbook: &Workbook) -> Result<Vec<u8>, CodecError> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(workbook)?
        } else {
            serde_json::to_vec(workbook)?
        };
        Ok(bytes)
    }
}

/// Check what deserialization cannot: sheet names, bounds and merges
fn validate_workbook(workbook: &Workbook) -> Result<(), CodecError> {
    if workbook.is_empty() {
        return Err(CodecError::InvalidDocument(
            "workbook has no worksheets".into(),
        ));
    }

    let mut names: Vec<&str> = Vec::with_capacity(workbook.sheet_count());
    for ws in workbook.worksheets() {
        if names.contains(&ws.name()) {
            return Err(CodecError::InvalidDocument(format!(
                "duplicate worksheet name '{}'",
                ws.name()
            )));
        }
        names.push(ws.name());

        if let Some(used) = ws.used_range() {
            check_bounds(ws.name(), &used)?;
        }
        if let Some((row, _)) = ws.row_heights().find(|&(row, _)| row == 0 || row > MAX_ROWS) {
            return Err(CodecError::InvalidDocument(format!(
                "'{}': row height set for row {} outside the sheet",
                ws.name(),
                row
            )));
        }

        let regions = ws.merged_regions();
        for (i, region) in regions.iter().enumerate() {
            check_bounds(ws.name(), region)?;
            if let Some(other) = regions[i + 1..].iter().find(|r| r.overlaps(region)) {
                return Err(CodecError::InvalidDocument(format!(
                    "'{}': merged regions {} and {} overlap",
                    ws.name(),
                    region,
                    other
                )));
            }
        }
    }
    Ok(())
}

fn check_bounds(sheet: &str, range: &CellRange) -> Result<(), CodecError> {
    let in_bounds = range.min_row() >= 1
        && range.max_row() <= MAX_ROWS
        && range.min_col() >= 1
        && range.max_col() <= MAX_COLS;
    if in_bounds {
        Ok(())
    } else {
        Err(CodecError::InvalidDocument(format!(
            "'{}': {:?} lies outside the sheet",
            sheet, range
        )))
    }
}
