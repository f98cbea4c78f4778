use serde_json::json;
use wain_lib::{SHEET_COLUMNS, SheetRow, add_sheet_report};

fn read_rows(path: &std::path::Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn row_follows_column_order() {
    let value = json!({
        "الملاحظات": "dent",
        "رقم الهاتف": "0911",
        "المكان": "Bahri",
        "رقم الشاسي": "JT99",
        "رقم اللوحة": "KH1234",
        "اللون": "white",
        "الموديل": "2012",
        "نوع السيارة": "Corolla",
        "تم الاتصال": "no",
    });
    let row = SheetRow::from_json(&value).unwrap();
    assert_eq!(
        row.cells(),
        ["no", "Corolla", "2012", "white", "KH1234", "JT99", "Bahri", "0911", "dent"]
    );
}

#[test]
fn missing_null_and_numeric_fields() {
    let row = SheetRow::from_json(&json!({"نوع السيارة": null, "الموديل": 2012, "plate": "X"}))
        .unwrap();
    assert_eq!(row.cells()[0], "");
    assert_eq!(row.cells()[1], "");
    assert_eq!(row.cells()[2], "2012");
    assert_eq!(row.cells()[8], "");
}

#[test]
fn appends_header_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("sheet.csv");

    let first = add_sheet_report(&path, r#"{"نوع السيارة": "A", "رقم اللوحة": "P1"}"#);
    assert!(first.is_success());
    assert_eq!(first.message, "report added to sheet");
    assert!(add_sheet_report(&path, r#"{"نوع السيارة": "B"}"#).is_success());

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], SHEET_COLUMNS.map(str::to_string).to_vec());
    assert_eq!(rows[1][1], "A");
    assert_eq!(rows[1][4], "P1");
    assert_eq!(rows[2][1], "B");
}

#[test]
fn invalid_body_is_an_error_response() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheet.csv");

    let bad_json = add_sheet_report(&path, "{not json");
    assert_eq!(bad_json.status, "error");

    let not_object = add_sheet_report(&path, "[1, 2]");
    assert_eq!(not_object.status, "error");
    assert!(not_object.message.contains("object"));

    assert!(!path.exists());
}
