//! Comma-separated bulk report import.
//!
//! Line format, fields trimmed:
//!
//! ```text
//! report_type, car_name, model, color, plate, chassis, location, phone[, notes]
//! ```
//!
//! `report_type` is `فقدان` / `lost` or `رصد` / `sighting`. Fields past the
//! ninth are ignored. Blank lines are skipped without counting as errors.

use rusqlite::Connection;
use thiserror::Error;
use wain_catalog::normalize::normalize;
use wain_catalog::types::{ImportLog, NewReport, ReportKind};
use wain_catalog::validate::{ValidationError, non_empty};
use wain_db::operations::{self, OperationError};
use wain_lib::{AdminGuard, RequestContext, SubmissionOutcome, register_report};

use crate::progress::ImportProgress;

/// Minimum number of fields on a data line; `notes` may be left off.
const MIN_FIELDS: usize = 8;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Admin authorization required")]
    Unauthorized,
}

/// Knobs for a bulk run.
#[derive(Debug, Clone)]
pub struct BulkOptions {
    /// Normalize plate and chassis like interactive submissions do. Off by
    /// default: bulk keys are stored as typed (trimmed only), so they only
    /// match interactively submitted keys when typed in normalized form.
    pub normalize_keys: bool,
    /// Label recorded in the import log.
    pub source_name: String,
}

impl Default for BulkOptions {
    fn default() -> Self {
        Self {
            normalize_keys: false,
            source_name: "bulk".to_string(),
        }
    }
}

/// A line that could not be imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    /// 1-based line number in the submitted text.
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Outcome of a bulk run.
#[derive(Debug, Default)]
pub struct BulkImportResult {
    pub success_count: u64,
    pub errors: Vec<LineError>,
    /// Matches reported by the match engine across all imported lines.
    pub match_count: u64,
}

/// Parse one non-blank line into a report payload.
pub fn parse_line(line: &str, normalize_keys: bool) -> Result<NewReport, ValidationError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < MIN_FIELDS {
        return Err(ValidationError::TooFewFields {
            found: fields.len(),
        });
    }

    let report_type = ReportKind::from_bulk_literal(fields[0])
        .ok_or_else(|| ValidationError::UnknownReportType(fields[0].to_string()))?;

    let car_name = fields[1];
    let phone = fields[7];
    if car_name.is_empty() || phone.is_empty() {
        return Err(ValidationError::MissingRequired);
    }

    let key = |raw: &str| {
        let value = if normalize_keys {
            normalize(raw)
        } else {
            raw.to_string()
        };
        Some(value).filter(|v| !v.is_empty())
    };
    let plate = key(fields[4]);
    let chassis = key(fields[5]);
    if plate.is_none() && chassis.is_none() {
        return Err(ValidationError::MissingIdentifier);
    }

    Ok(NewReport {
        report_type,
        car_name: car_name.to_string(),
        model: non_empty(fields[2]),
        color: non_empty(fields[3]),
        chassis,
        plate,
        location: non_empty(fields[6]),
        phone: phone.to_string(),
        image_path: None,
        notes: fields.get(8).and_then(|n| non_empty(n)),
    })
}

/// Import every line of `text`, storing and matching each valid one.
///
/// Line numbers count from the first non-blank line of `text`, since the
/// text is trimmed as a whole before splitting; blank lines inside it still
/// take a number. Per-line failures, storage errors included, are collected
/// in the result instead of aborting the run. The run is recorded in the
/// import log; a failed log write is only warned about, since every line is
/// already committed by then.
pub fn import_bulk(
    conn: &Connection,
    text: &str,
    options: &BulkOptions,
    progress: Option<&dyn ImportProgress>,
) -> Result<BulkImportResult, ImportError> {
    let lines: Vec<&str> = text.trim().split('\n').collect();
    let total = lines.len();
    let mut result = BulkImportResult::default();
    let mut lines_seen = 0i64;

    for (i, raw) in lines.iter().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();

        if !line.is_empty() {
            lines_seen += 1;
            match import_line(conn, line, options.normalize_keys) {
                Ok(matches) => {
                    result.success_count += 1;
                    result.match_count += matches;
                }
                Err(message) => {
                    log::debug!("Bulk line {} rejected: {}", line_no, message);
                    result.errors.push(LineError {
                        line: line_no,
                        message,
                    });
                }
            }
        }

        if let Some(p) = progress {
            p.on_line(line_no, total);
        }
    }

    if let Err(e) = log_import(conn, &options.source_name, lines_seen, &result) {
        log::warn!("Failed to record bulk import in the import log: {}", e);
    }

    let summary = format!(
        "Imported {} report(s), {} error(s), {} match(es)",
        result.success_count,
        result.errors.len(),
        result.match_count,
    );
    log::info!("{}", summary);
    if let Some(p) = progress {
        p.on_complete(&summary);
    }

    Ok(result)
}

/// [`import_bulk`] for admin callers only.
pub fn guarded_bulk_import(
    conn: &Connection,
    text: &str,
    options: &BulkOptions,
    guard: &AdminGuard,
    ctx: &RequestContext,
    progress: Option<&dyn ImportProgress>,
) -> Result<BulkImportResult, ImportError> {
    if !guard.is_authorized_admin(ctx) {
        return Err(ImportError::Unauthorized);
    }
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyBulkData.into());
    }
    import_bulk(conn, text, options, progress)
}

/// Store one line and run the match engine. Returns the number of matches.
fn import_line(conn: &Connection, line: &str, normalize_keys: bool) -> Result<u64, String> {
    let report = parse_line(line, normalize_keys).map_err(|e| e.to_string())?;
    match register_report(conn, &report).map_err(|e| e.to_string())? {
        SubmissionOutcome::Matched { matches, .. } => Ok(matches.len() as u64),
        _ => Ok(0),
    }
}

fn log_import(
    conn: &Connection,
    source_name: &str,
    lines_seen: i64,
    result: &BulkImportResult,
) -> Result<i64, ImportError> {
    let entry = ImportLog {
        id: 0,
        source_name: source_name.to_string(),
        imported_at: String::new(),
        lines_seen,
        records_created: result.success_count as i64,
        errors_found: result.errors.len() as i64,
        matches_found: result.match_count as i64,
    };
    Ok(operations::insert_import_log(conn, &entry)?)
}
