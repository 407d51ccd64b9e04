//! Style propagation between cells

use sheet_stencil_core::{CellAddress, Style, Worksheet};

/// Copy every style attribute present on `source` onto `dest`
///
/// Attributes `source` leaves unset keep their current value on `dest`.
/// Each copied attribute is an independent value, so later edits to either
/// cell never show through on the other.
pub fn copy_style(source: &Style, dest: &mut Style) {
    if let Some(font) = &source.font {
        dest.font = Some(font.clone());
    }
    if source.border.is_some() {
        dest.border = source.border;
    }
    if source.fill.is_some() {
        dest.fill = source.fill;
    }
    if source.alignment.is_some() {
        dest.alignment = source.alignment;
    }
    if let Some(format) = &source.number_format {
        dest.number_format = Some(format.clone());
    }
}

/// Copy the style of the cell at `from` onto the cell at `to`
///
/// Nothing happens when no cell exists at `from`. Returns whether a copy
/// took place.
pub fn copy_cell_style(
    worksheet: &mut Worksheet,
    from: CellAddress,
    to: CellAddress,
) -> sheet_stencil_core::Result<bool> {
    if from == to {
        return Ok(false);
    }
    let Some(source) = worksheet.style_at(from.row, from.col).cloned() else {
        return Ok(false);
    };
    copy_style(&source, worksheet.style_at_mut(to.row, to.col)?);
    Ok(true)
}
