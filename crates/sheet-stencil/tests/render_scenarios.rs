//! End-to-end rendering tests (template -> payload -> rendered sheet -> verify)

use pretty_assertions::assert_eq;
use serde::Serialize;
use sheet_stencil::prelude::*;

fn payload(json: &str) -> Payload {
    Payload::from_json_str(json).unwrap()
}

fn range(s: &str) -> CellRange {
    CellRange::parse(s).unwrap()
}

/// Items table at row 5 with a merged footer below it
fn items_template() -> Workbook {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();

    sheet.set_cell_value("A1", "Order {{ order_id }}").unwrap();
    sheet.merge_cells(&range("A1:C1")).unwrap();

    sheet.set_cell_value("B5", "{{ items.name }}").unwrap();
    sheet.set_cell_value("C5", "{{ items.qty }}").unwrap();
    sheet
        .set_cell_style("B5", &Style::new().bold(true).fill_color(Color::LIGHT_GRAY))
        .unwrap();
    sheet
        .set_cell_style("C5", &Style::new().number_format("0"))
        .unwrap();

    sheet.set_cell_value("A6", "Thank you").unwrap();
    sheet.merge_cells(&range("A6:C6")).unwrap();
    sheet.merge_cells(&range("A8:B9")).unwrap();
    wb
}

/// Three records fill rows 5..=7 and shift merges at row >= 6 down by two
#[test]
fn test_items_scenario() {
    let mut wb = items_template();
    let stats = wb
        .render(&payload(
            r#"{"items": [{"name":"A","qty":1},{"name":"B","qty":2},{"name":"C","qty":3}]}"#,
        ))
        .unwrap();

    let sheet = wb.worksheet(0).unwrap();
    let rows: Vec<(CellValue, CellValue)> = (5..=7)
        .map(|row| (sheet.value_at(row, 2), sheet.value_at(row, 3)))
        .collect();
    assert_eq!(
        rows,
        vec![
            (CellValue::text("A"), CellValue::Number(1.0)),
            (CellValue::text("B"), CellValue::Number(2.0)),
            (CellValue::text("C"), CellValue::Number(3.0)),
        ]
    );

    let mut regions = sheet.merged_regions().to_vec();
    regions.sort();
    assert_eq!(regions, vec![range("A1:C1"), range("A8:C8"), range("A10:B11")]);
    assert_eq!(sheet.get_value("A8").unwrap(), CellValue::text("Thank you"));

    assert_eq!(stats.tables_expanded, 1);
    assert_eq!(stats.rows_inserted, 2);
    assert_eq!(stats.records_written, 3);
}

/// N records and M fields give N populated rows and the same region count
#[test]
fn test_expansion_preserves_region_count() {
    for n in 1..6 {
        let mut wb = items_template();
        let before = wb.worksheet(0).unwrap().merged_regions().len();

        let records: Vec<String> = (0..n)
            .map(|i| format!(r#"{{"name":"r{}","qty":{}}}"#, i, i))
            .collect();
        wb.render(&payload(&format!(r#"{{"items": [{}]}}"#, records.join(","))))
            .unwrap();

        let sheet = wb.worksheet(0).unwrap();
        assert_eq!(sheet.merged_regions().len(), before);
        for i in 0..n {
            assert_eq!(
                sheet.value_at(5 + i, 2),
                CellValue::text(format!("r{}", i))
            );
        }
        assert_eq!(sheet.value_at(5 + n, 1), CellValue::text("Thank you"));
    }
}

/// New rows carry the template row style, as independent copies
#[test]
fn test_template_style_propagates() {
    let mut wb = items_template();
    wb.render(&payload(r#"{"items": [{"name":"A","qty":1},{"name":"B","qty":2}]}"#))
        .unwrap();

    let sheet = wb.worksheet_mut(0).unwrap();
    assert_eq!(sheet.style_at(6, 2), sheet.style_at(5, 2));
    assert_eq!(
        sheet.style_at(6, 3),
        Some(&Style::new().number_format("0"))
    );

    sheet.style_at_mut(6, 2).unwrap().font_mut().italic = true;
    assert!(!sheet.style_at(5, 2).unwrap().font.as_ref().unwrap().italic);
}

/// An empty payload is a validation error and nothing is produced
#[test]
fn test_empty_payload() {
    let codec = JsonSnapshotCodec::new();
    let template = codec.save(&items_template()).unwrap();

    let result = Renderer::new().render_document(&codec, &template, &payload("{}"));
    assert!(matches!(result, Err(RenderError::Validation(_))));
}

/// A list for a table with no markers leaves the sheet alone
#[test]
fn test_table_without_markers() {
    let mut wb = items_template();
    let before = wb.worksheet(0).unwrap().clone();

    let stats = wb
        .render(&payload(r#"{"orders": [{"id": 1}, {"id": 2}]}"#))
        .unwrap();

    let sheet = wb.worksheet(0).unwrap();
    assert_eq!(stats.tables_skipped, 1);
    assert_eq!(sheet.merged_regions(), before.merged_regions());
    assert_eq!(sheet.cell_count(), before.cell_count());
    assert_eq!(sheet.get_value("B5").unwrap(), CellValue::text("{{ items.name }}"));
}

/// A field missing from a record keeps the cell's prior content
#[test]
fn test_missing_field_keeps_content() {
    let mut wb = items_template();
    wb.render(&payload(r#"{"items": [{"name":"A"},{"name":"B","qty":2}]}"#))
        .unwrap();

    let sheet = wb.worksheet(0).unwrap();
    assert_eq!(sheet.get_value("C5").unwrap(), CellValue::text("{{ items.qty }}"));
    assert_eq!(sheet.get_value("C6").unwrap(), CellValue::Number(2.0));
}

/// A list is never used as a scalar
#[test]
fn test_list_is_not_substituted() {
    let mut wb = items_template();
    {
        let sheet = wb.worksheet_mut(0).unwrap();
        sheet.set_cell_value("A3", "{{ items }} / {{ order_id }}").unwrap();
    }

    wb.render(&payload(r#"{"order_id": 7, "items": [{"name": "A"}]}"#))
        .unwrap();

    let sheet = wb.worksheet(0).unwrap();
    assert_eq!(sheet.get_value("A3").unwrap(), CellValue::text("{{ items }} / 7"));
    assert_eq!(sheet.get_value("A1").unwrap(), CellValue::text("Order 7"));
}

/// Structs serialize into payloads with field order intact
#[test]
fn test_struct_payload() {
    #[derive(Serialize)]
    struct Line {
        name: &'static str,
        qty: u32,
    }

    #[derive(Serialize)]
    struct Order {
        order_id: &'static str,
        items: Vec<Line>,
    }

    let order = Order {
        order_id: "SO-1",
        items: vec![Line { name: "Bolt", qty: 4 }, Line { name: "Nut", qty: 8 }],
    };

    let mut wb = items_template();
    wb.render(&Payload::from_serializable(&order).unwrap()).unwrap();

    let sheet = wb.worksheet(0).unwrap();
    assert_eq!(sheet.get_value("A1").unwrap(), CellValue::text("Order SO-1"));
    assert_eq!(sheet.get_value("C6").unwrap(), CellValue::Number(8.0));
}

/// Only the selected sheet is rendered
#[test]
fn test_sheet_selection() {
    let mut wb = items_template();
    let mut summary = Worksheet::new("Summary");
    summary.set_cell_value("A1", "{{ order_id }}").unwrap();
    wb.add_worksheet(summary).unwrap();

    let options = RenderOptions {
        sheets: SheetSelection::Named("Summary".into()),
    };
    let stats = wb
        .render_with_options(&payload(r#"{"order_id": "X"}"#), &options)
        .unwrap();

    assert_eq!(stats.sheets_rendered, 1);
    assert_eq!(
        wb.worksheet_by_name("Summary").unwrap().get_value("A1").unwrap(),
        CellValue::text("X")
    );
    assert_eq!(
        wb.worksheet(0).unwrap().get_value("A1").unwrap(),
        CellValue::text("Order {{ order_id }}")
    );
}
