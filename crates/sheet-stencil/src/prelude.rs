//! Prelude module - common imports for sheet-stencil users
//!
//! ```rust
//! use sheet_stencil::prelude::*;
//! ```

pub use crate::{
    // Style types
    Alignment,
    BorderEdge,
    BorderLineStyle,
    BorderSide,
    BorderStyle,
    CellAddress,
    CellRange,
    // Cell types
    CellValue,
    Color,

    // Codec types
    DocumentCodec,
    // Error types
    Error,
    FillStyle,
    FontStyle,
    HorizontalAlignment,
    JsonSnapshotCodec,
    NumberFormat,
    // Rendering types
    Payload,
    RenderError,
    RenderOptions,
    RenderStats,
    Renderer,
    Result,
    SheetSelection,

    Style,
    // Template files
    TemplateCatalog,
    VerticalAlignment,
    // Main types
    Workbook,
    // Extension traits
    WorkbookExt,
    WorkbookRenderExt,
    Worksheet,
};
