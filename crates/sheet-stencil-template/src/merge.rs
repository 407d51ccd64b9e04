//! Row insertion that keeps merged regions attached to their cells
//!
//! [`Worksheet::insert_rows`] moves cells but leaves merge declarations in
//! place, which would leave every merge below the insertion point covering
//! the wrong cells. [`insert_rows_preserving_merges`] re-declares each region
//! at its new position.

use sheet_stencil_core::{CellRange, Result, Worksheet};

/// Where a merged region ends up after `count` rows are inserted before `at`
///
/// - regions starting at or below `at` move down by `count`
/// - regions straddling `at` grow by `count`
/// - regions entirely above `at` stay put
pub fn relocate_region(region: &CellRange, at: u32, count: u32) -> CellRange {
    if region.min_row() >= at {
        region.shifted_rows(count)
    } else if region.max_row() >= at {
        CellRange::from_indices(
            region.min_row(),
            region.min_col(),
            region.max_row().saturating_add(count),
            region.max_col(),
        )
    } else {
        *region
    }
}

/// Insert `count` empty rows before `at`, carrying merged regions along
///
/// The number of merged regions is unchanged afterwards. Inserting zero rows
/// does nothing.
pub fn insert_rows_preserving_merges(worksheet: &mut Worksheet, at: u32, count: u32) -> Result<()> {
    if count == 0 {
        return Ok(());
    }

    let regions: Vec<CellRange> = worksheet.merged_regions().to_vec();

    // Merged areas need backing cells for the coordinates they cover, both
    // before the move and over the grown part of a straddling region
    materialize(worksheet, &regions)?;
    worksheet.insert_rows(at, count)?;

    let relocated: Vec<CellRange> = regions
        .iter()
        .map(|region| relocate_region(region, at, count))
        .collect();
    materialize(worksheet, &relocated)?;

    for region in &regions {
        worksheet.unmerge_cells(region);
    }
    for region in &relocated {
        worksheet.merge_cells(region)?;
    }

    log::debug!(
        "inserted {} row(s) at {} in '{}', re-declared {} merged region(s)",
        count,
        at,
        worksheet.name(),
        relocated.len()
    );
    Ok(())
}

fn materialize(worksheet: &mut Worksheet, regions: &[CellRange]) -> Result<()> {
    for region in regions {
        for addr in region.cells() {
            worksheet.ensure_cell_at(addr.row, addr.col)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheet_stencil_core::CellValue;

    fn range(s: &str) -> CellRange {
        CellRange::parse(s).unwrap()
    }

    #[test]
    fn test_relocate_region() {
        assert_eq!(relocate_region(&range("A5:B6"), 5, 3), range("A8:B9"));
        assert_eq!(relocate_region(&range("A7:B7"), 5, 3), range("A10:B10"));
        assert_eq!(relocate_region(&range("A1:B2"), 5, 3), range("A1:B2"));
        assert_eq!(relocate_region(&range("A4:A6"), 5, 3), range("A4:A9"));
        assert_eq!(relocate_region(&range("C4:D4"), 5, 3), range("C4:D4"));
    }

    #[test]
    fn test_shift_regions_below() {
        let mut ws = Worksheet::new("Sheet1");
        ws.merge_cells(&range("A1:C1")).unwrap();
        ws.merge_cells(&range("A5:B6")).unwrap();
        ws.merge_cells(&range("D10:E10")).unwrap();
        ws.set_cell_value("A5", "kept").unwrap();

        insert_rows_preserving_merges(&mut ws, 5, 3).unwrap();

        let mut regions = ws.merged_regions().to_vec();
        regions.sort();
        assert_eq!(
            regions,
            vec![range("A1:C1"), range("A8:B9"), range("D13:E13")]
        );
        assert_eq!(ws.get_value("A8").unwrap(), CellValue::text("kept"));
        assert_eq!(ws.get_value("A5").unwrap(), CellValue::Empty);
    }

    #[test]
    fn test_zero_rows_is_noop() {
        let mut ws = Worksheet::new("Sheet1");
        ws.merge_cells(&range("A5:B6")).unwrap();
        ws.set_cell_value("A5", 1.0).unwrap();

        insert_rows_preserving_merges(&mut ws, 3, 0).unwrap();

        assert_eq!(ws.merged_regions(), &[range("A5:B6")]);
        assert_eq!(ws.cell_count(), 1);
    }

    #[test]
    fn test_straddling_region_is_extended() {
        let mut ws = Worksheet::new("Sheet1");
        ws.merge_cells(&range("B2:B4")).unwrap();

        insert_rows_preserving_merges(&mut ws, 3, 2).unwrap();

        assert_eq!(ws.merged_regions(), &[range("B2:B6")]);
    }

    #[test]
    fn test_region_count_preserved_and_cells_materialized() {
        let mut ws = Worksheet::new("Sheet1");
        ws.merge_cells(&range("A2:B3")).unwrap();
        ws.merge_cells(&range("C8:C9")).unwrap();

        insert_rows_preserving_merges(&mut ws, 2, 4).unwrap();

        assert_eq!(ws.merged_regions().len(), 2);
        for region in ws.merged_regions() {
            for addr in region.cells() {
                assert!(ws.cell_at(addr.row, addr.col).is_some(), "missing {}", addr);
            }
        }
    }

    #[test]
    fn test_regions_above_insertion_are_materialized() {
        let mut ws = Worksheet::new("Sheet1");
        ws.merge_cells(&range("A1:C1")).unwrap();

        insert_rows_preserving_merges(&mut ws, 5, 1).unwrap();

        assert_eq!(ws.merged_regions(), &[range("A1:C1")]);
        assert_eq!(ws.cell_count(), 3);
        assert!((1..=3).all(|col| ws.cell_at(1, col).is_some()));
    }

    #[test]
    fn test_row_heights_follow_rows() {
        let mut ws = Worksheet::new("Sheet1");
        ws.set_row_height(4, 30.0).unwrap();
        ws.set_cell_value("A4", "x").unwrap();

        insert_rows_preserving_merges(&mut ws, 2, 2).unwrap();

        assert_eq!(ws.row_height(6), Some(30.0));
        assert_eq!(ws.row_height(4), None);
    }
}
