use std::path::Path;

use pretty_assertions::assert_eq;

use ditel_site::importer::{Cell, ImportError, Importer, Sheet};
use ditel_site::models::{Catalog, Product};

fn text(value: &str) -> Cell {
    Cell::Text(value.to_string())
}

fn sheet() -> Sheet {
    Sheet::new(
        "Products",
        vec!["Product Name".into(), "Category".into(), "Price".into(), "Stock".into()],
        vec![
            vec![text("USB Hub"), text("Electronics"), Cell::Number(499.0), Cell::Integer(12)],
            vec![text(""), text("Electronics"), Cell::Number(10.0), Cell::Empty],
            vec![text("HDMI Cable"), text("Electronics"), text("249.50"), Cell::Empty],
        ],
    )
}

#[test]
fn missing_spreadsheet_is_reported() {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("products.xlsx");
    let output = directory.path().join("products.json");

    let error = Importer::run(&input, &output).unwrap_err();
    assert!(matches!(error, ImportError::NotFound(path) if path == input));
    assert!(!output.exists());
}

#[test]
fn unreadable_workbook_is_reported() {
    let directory = tempfile::tempdir().unwrap();
    let input = directory.path().join("products.xlsx");
    std::fs::write(&input, "not a spreadsheet").unwrap();

    let error = Importer::import_file(&input).unwrap_err();
    assert!(matches!(error, ImportError::Workbook { .. }), "{error}");
}

#[test]
fn writes_catalog_json_into_new_directories() {
    let directory = tempfile::tempdir().unwrap();
    let output = directory.path().join("data").join("products.json");

    let report = Importer::import_sheet(&sheet()).unwrap();
    assert_eq!(report.skipped, 1);
    Importer::write_json(&report.products, &output).unwrap();

    let json = std::fs::read_to_string(&output).unwrap();
    assert!(json.ends_with("}\n]\n"));

    let written: serde_json::Value = serde_json::from_str(&json).unwrap();
    let hub = &written[0];
    assert_eq!(hub["id"], "electronics-usb-hub-0");
    assert_eq!(hub["price"], serde_json::json!(499));
    assert_eq!(hub["stock"], 12);
    assert_eq!(hub["imageMissing"], true);
    assert_eq!(hub["urlSlug"], "usb-hub");
    assert_eq!(written[1]["price"], serde_json::json!(249.5));
    assert_eq!(written[1]["id"], "electronics-hdmi-cable-2");
}

#[test]
fn written_catalog_loads_back() {
    let directory = tempfile::tempdir().unwrap();
    let output = directory.path().join("products.json");

    let report = Importer::import_sheet(&sheet()).unwrap();
    Importer::write_json(&report.products, &output).unwrap();

    let catalog = Catalog::from_json(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let names: Vec<&str> = catalog.products().iter().map(|product| product.name.as_str()).collect();
    assert_eq!(names, vec!["USB Hub", "HDMI Cable"]);

    let hub: &Product = catalog.product("electronics-usb-hub-0").unwrap();
    assert!(hub.image_missing);
    assert!(hub.in_stock());
}

#[test]
fn reads_first_worksheet_of_a_workbook() {
    let input = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/usb_hub.xlsx");

    let sheet = Sheet::read_first(&input).unwrap();
    assert_eq!(sheet.name, "Products");
    assert_eq!(sheet.headers, vec!["Product Name", "Category", "Price"]);
    assert_eq!(sheet.rows.len(), 1);
    assert_eq!(sheet.cell(0, 0), &text("USB Hub"));
    assert_eq!(sheet.cell(0, 2), &Cell::Number(499.0));
}

#[test]
fn overflowing_price_is_skipped_instead_of_written_as_null() {
    let sheet = Sheet::new(
        "Products",
        vec!["Name".into(), "Price".into()],
        vec![
            vec![text("Router"), text("1e999")],
            vec![text("Switch"), Cell::Number(1500.0)],
        ],
    );

    let report = Importer::import_sheet(&sheet).unwrap();
    assert_eq!(report.skipped, 1);

    let names: Vec<&str> = report.products.iter().map(|product| product.name.as_str()).collect();
    assert_eq!(names, vec!["Switch"]);
}
