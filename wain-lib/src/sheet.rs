//! Legacy spreadsheet integration.
//!
//! A flat JSON object keyed by the sheet's Arabic column labels is written
//! as one row of a local CSV sheet, in column order. Every failure is
//! reported as a `status: "error"` response rather than an `Err`.

use std::fs::OpenOptions;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Sheet header, in column order. Each label is also the JSON key its cell
/// is read from.
pub const SHEET_COLUMNS: [&str; 9] = [
    "تم الاتصال",
    "نوع السيارة",
    "الموديل",
    "اللون",
    "رقم اللوحة",
    "رقم الشاسي",
    "المكان",
    "رقم الهاتف",
    "الملاحظات",
];

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// One sheet row, one cell per entry of [`SHEET_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow(pub [String; 9]);

impl SheetRow {
    /// Flatten a JSON object. Missing keys and nulls become empty cells;
    /// non-string values are written in their JSON form.
    pub fn from_json(value: &Value) -> Result<Self, SheetError> {
        let obj = value.as_object().ok_or(SheetError::NotAnObject)?;
        let mut cells: [String; 9] = Default::default();
        for (cell, key) in cells.iter_mut().zip(SHEET_COLUMNS) {
            *cell = match obj.get(key) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            };
        }
        Ok(Self(cells))
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }
}

/// Append a row to the sheet, writing the header first if the file is new
/// or empty.
pub fn append_row(path: &Path, row: &SheetRow) -> Result<(), SheetError> {
    let io_err = |source| SheetError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;
    let needs_header = file.metadata().map_err(io_err)?.len() == 0;

    let mut writer = csv::Writer::from_writer(file);
    if needs_header {
        writer.write_record(SHEET_COLUMNS)?;
    }
    writer.write_record(row.cells())?;
    writer.flush().map_err(io_err)?;
    Ok(())
}

/// Answer returned to the sheet caller.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SheetResponse {
    pub status: String,
    pub message: String,
}

impl SheetResponse {
    fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: "report added to sheet".to_string(),
        }
    }

    fn error(err: &SheetError) -> Self {
        Self {
            status: "error".to_string(),
            message: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Parse a JSON request body and append it to the sheet at `path`.
pub fn add_sheet_report(path: &Path, body: &str) -> SheetResponse {
    let result = serde_json::from_str::<Value>(body)
        .map_err(SheetError::from)
        .and_then(|value| SheetRow::from_json(&value))
        .and_then(|row| append_row(path, &row));

    match result {
        Ok(()) => {
            log::info!("Appended report to sheet {}", path.display());
            SheetResponse::success()
        }
        Err(e) => {
            log::warn!("Sheet append failed: {}", e);
            SheetResponse::error(&e)
        }
    }
}
