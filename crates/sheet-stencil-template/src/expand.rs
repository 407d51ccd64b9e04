//! Table expansion
//!
//! A table is a template row of `{{ table.field }}` markers. Expanding it
//! writes one row per record, starting at the template row, and pushes
//! everything below down to make room.

use serde_json::Value;
use sheet_stencil_core::{CellAddress, Worksheet, MAX_ROWS};

use crate::error::ProcessingError;
use crate::merge::insert_rows_preserving_merges;
use crate::payload::{cell_value_from_json, Record};
use crate::placeholder::find_table_placeholders;
use crate::style::copy_cell_style;

/// What expanding one table did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableExpansion {
    /// First row written (the template row)
    pub start_row: u32,
    /// Rows inserted below the template row
    pub rows_inserted: u32,
    /// Cells written from record values
    pub cells_written: usize,
}

/// Expand `table` with `records`
///
/// Returns `Ok(None)` when the worksheet has no markers for this table, in
/// which case the worksheet is left untouched. Otherwise:
///
/// - the template row is the smallest row holding one of the table's markers
/// - `records.len() - 1` rows are inserted directly below it
/// - record `i` is written to template row + `i`, in each marker's column
/// - each written cell receives the style of the template row cell in its column
///
/// Fields a record lacks leave their cell as it was, so on the template row
/// the marker text stays in place. Record keys without a marker are ignored.
pub fn expand_table(
    worksheet: &mut Worksheet,
    table: &str,
    records: &[Value],
) -> Result<Option<TableExpansion>, ProcessingError> {
    let placeholders = find_table_placeholders(worksheet, table);
    let Some(start_row) = placeholders.values().map(|addr| addr.row).min() else {
        log::debug!("no markers for table '{}' in '{}'", table, worksheet.name());
        return Ok(None);
    };

    let records = as_records(table, records)?;
    let extra = u32::try_from(records.len().saturating_sub(1))
        .ok()
        .filter(|extra| start_row.saturating_add(*extra) <= MAX_ROWS)
        .ok_or_else(|| ProcessingError::TooManyRecords {
            table: table.to_string(),
            count: records.len(),
        })?;

    log::debug!(
        "expanding table '{}' in '{}': {} record(s), {} field(s), template row {}",
        table,
        worksheet.name(),
        records.len(),
        placeholders.len(),
        start_row
    );

    if extra > 0 {
        insert_rows_preserving_merges(worksheet, start_row + 1, extra)?;
    }

    let mut cells_written = 0;
    for (offset, record) in (0u32..).zip(records) {
        let row = start_row + offset;
        for (field, marker) in &placeholders {
            let Some(value) = record.get(field) else {
                continue;
            };
            worksheet.set_cell_value_at(row, marker.col, cell_value_from_json(value))?;
            copy_cell_style(
                worksheet,
                CellAddress::new(start_row, marker.col),
                CellAddress::new(row, marker.col),
            )?;
            cells_written += 1;
        }
    }

    Ok(Some(TableExpansion {
        start_row,
        rows_inserted: extra,
        cells_written,
    }))
}

fn as_records<'a>(table: &str, values: &'a [Value]) -> Result<Vec<&'a Record>, ProcessingError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Object(record) => Ok(record),
            _ => Err(ProcessingError::RecordNotObject {
                table: table.to_string(),
                index,
            }),
        })
        .collect()
}
