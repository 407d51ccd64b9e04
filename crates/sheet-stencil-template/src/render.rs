//! The renderer: payload validation, scalar substitution, table expansion

use sheet_stencil_core::{Workbook, Worksheet};

use crate::codec::DocumentCodec;
use crate::error::{ProcessingError, RenderError, RenderResult};
use crate::expand::expand_table;
use crate::options::{RenderOptions, RenderStats, SheetSelection};
use crate::payload::Payload;
use crate::scalar::substitute_worksheet;

/// Renders payloads into templates
///
/// A renderer holds only its options; every call works on the worksheet it
/// is handed and keeps nothing afterwards.
///
/// ```
/// use sheet_stencil_core::{CellValue, Worksheet};
/// use sheet_stencil_template::{Payload, Renderer};
///
/// let mut ws = Worksheet::new("Sheet1");
/// ws.set_cell_value("A1", "Hello {{ name }}").unwrap();
/// ws.set_cell_value("A2", "{{ rows.v }}").unwrap();
///
/// let payload = Payload::from_json_str(r#"{"name": "world", "rows": [{"v": 1}, {"v": 2}]}"#).unwrap();
/// let stats = Renderer::new().render(&mut ws, &payload).unwrap();
///
/// assert_eq!(ws.get_value("A1").unwrap(), CellValue::text("Hello world"));
/// assert_eq!(ws.get_value("A3").unwrap(), CellValue::Number(2.0));
/// assert_eq!(stats.rows_inserted, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given options
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// The options this renderer uses
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `payload` into one worksheet
    ///
    /// An empty payload is rejected before the worksheet is touched. Any
    /// failure after that is reported as [`RenderError::Processing`] and
    /// leaves the worksheet in an unspecified state.
    pub fn render(&self, worksheet: &mut Worksheet, payload: &Payload) -> RenderResult<RenderStats> {
        payload.validate()?;
        render_sheet(worksheet, payload)
    }

    /// Render `payload` into every selected worksheet of a workbook
    pub fn render_workbook(
        &self,
        workbook: &mut Workbook,
        payload: &Payload,
    ) -> RenderResult<RenderStats> {
        payload.validate()?;
        let indices = self.selected_sheets(workbook)?;

        let mut stats = RenderStats::default();
        for index in indices {
            if let Some(worksheet) = workbook.worksheet_mut(index) {
                stats.merge(&render_sheet(worksheet, payload)?);
            }
        }
        Ok(stats)
    }

    /// Load a document, render it and save the result
    ///
    /// Nothing is saved when rendering fails.
    pub fn render_document<C: DocumentCodec + ?Sized>(
        &self,
        codec: &C,
        bytes: &[u8],
        payload: &Payload,
    ) -> RenderResult<Vec<u8>> {
        payload.validate()?;
        let mut workbook = codec.load(bytes)?;
        self.render_workbook(&mut workbook, payload)?;
        Ok(codec.save(&workbook)?)
    }

    fn selected_sheets(&self, workbook: &Workbook) -> RenderResult<Vec<usize>> {
        match &self.options.sheets {
            SheetSelection::All => Ok((0..workbook.sheet_count()).collect()),
            SheetSelection::Named(name) => workbook
                .sheet_index(name)
                .map(|index| vec![index])
                .ok_or_else(|| RenderError::validation(format!("no worksheet named '{}'", name))),
            SheetSelection::Index(index) if *index < workbook.sheet_count() => Ok(vec![*index]),
            SheetSelection::Index(index) => Err(RenderError::validation(format!(
                "worksheet index {} out of range ({} worksheets)",
                index,
                workbook.sheet_count()
            ))),
        }
    }
}

fn render_sheet(worksheet: &mut Worksheet, payload: &Payload) -> RenderResult<RenderStats> {
    match process_sheet(worksheet, payload) {
        Ok(stats) => {
            log::info!(
                "rendered '{}': {} substitution(s), {} table(s) expanded, {} row(s) inserted",
                worksheet.name(),
                stats.cells_substituted,
                stats.tables_expanded,
                stats.rows_inserted
            );
            Ok(stats)
        }
        Err(source) => {
            log::error!("failed to render '{}': {}", worksheet.name(), source);
            Err(RenderError::Processing { source })
        }
    }
}

fn process_sheet(
    worksheet: &mut Worksheet,
    payload: &Payload,
) -> Result<RenderStats, ProcessingError> {
    let mut stats = RenderStats {
        sheets_rendered: 1,
        cells_substituted: substitute_worksheet(worksheet, payload),
        ..Default::default()
    };

    for (table, records) in payload.tables() {
        match expand_table(worksheet, table, records)? {
            Some(expansion) => {
                stats.tables_expanded += 1;
                stats.rows_inserted += u64::from(expansion.rows_inserted);
                stats.records_written += records.len();
            }
            None => stats.tables_skipped += 1,
        }
    }

    Ok(stats)
}
