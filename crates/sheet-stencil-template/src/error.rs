//! Error types for template rendering

use thiserror::Error;

use crate::codec::CodecError;

/// Result type for rendering operations
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Errors surfaced by the [`Renderer`](crate::Renderer)
///
/// Callers see exactly one failure kind per cause: a bad payload is
/// [`RenderError::Validation`] and is reported before anything is touched;
/// anything that goes wrong while the worksheet is being rewritten is
/// [`RenderError::Processing`]. After a processing failure the worksheet may
/// be half-rendered and must be discarded.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Payload missing, empty or malformed, or a sheet selection that does not resolve
    #[error("invalid payload: {0}")]
    Validation(String),

    /// Scanning, substitution or table expansion failed
    #[error("spreadsheet processing failed: {source}")]
    Processing {
        #[source]
        source: ProcessingError,
    },

    /// The document could not be loaded or saved
    #[error("document codec error: {0}")]
    Codec(#[from] CodecError),
}

impl RenderError {
    /// Create a validation error with a message
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        RenderError::Validation(msg.into())
    }
}

impl From<ProcessingError> for RenderError {
    fn from(source: ProcessingError) -> Self {
        RenderError::Processing { source }
    }
}

/// The underlying cause of a [`RenderError::Processing`]
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// The worksheet rejected a structural change or cell write
    #[error(transparent)]
    Sheet(#[from] sheet_stencil_core::Error),

    /// A list entry bound to a table is not a record
    #[error("table '{table}': entry {index} is not an object")]
    RecordNotObject { table: String, index: usize },

    /// The table has more records than a worksheet can hold
    #[error("table '{table}': {count} records do not fit in a worksheet")]
    TooManyRecords { table: String, count: usize },
}
