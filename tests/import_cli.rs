use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn import_products(input: &Path, output: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_import-products"))
        .arg(input)
        .arg("--output")
        .arg(output)
        .env("RUST_LOG", "info")
        .output()
        .unwrap()
}

#[test]
fn missing_spreadsheet_exits_with_failure() {
    let directory = tempfile::tempdir().unwrap();
    let output = directory.path().join("products.json");

    let result = import_products(&directory.path().join("missing.xlsx"), &output);

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("spreadsheet not found"));
    assert!(!output.exists());
}

#[test]
fn header_only_workbook_exits_with_failure() {
    let directory = tempfile::tempdir().unwrap();
    let output = directory.path().join("products.json");

    let result = import_products(&fixture("headers_only.xlsx"), &output);

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("no data found in sheet 'Products'"));
    assert!(!output.exists());
}

#[test]
fn workbook_is_converted_to_catalog_json() {
    let directory = tempfile::tempdir().unwrap();
    let output = directory.path().join("data").join("products.json");

    let result = import_products(&fixture("usb_hub.xlsx"), &output);
    assert_eq!(result.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Processed 1 products from 1 rows"));
    assert!(stdout.contains("Columns: Product Name, Category, Price"));
    assert!(stdout.contains("   - Electronics: 1 products"));

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let products = written.as_array().unwrap();
    assert_eq!(products.len(), 1);

    let hub = &products[0];
    assert_eq!(hub["id"], "electronics-usb-hub-0");
    assert_eq!(hub["name"], "USB Hub");
    assert_eq!(hub["category"], "Electronics");
    assert_eq!(hub["price"], serde_json::json!(499));
    assert_eq!(hub["imageMissing"], true);
    assert_eq!(hub["urlSlug"], "usb-hub");
    assert_eq!(
        hub["imageUrl"],
        ditel_site::importer::GENERIC_PLACEHOLDER_IMAGE
    );
}
