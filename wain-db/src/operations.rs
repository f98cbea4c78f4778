//! Write operations and single-row lookups for reports and matches.

use rusqlite::types::Type;
use rusqlite::{Connection, Row, params};
use thiserror::Error;
use wain_catalog::types::*;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
}

/// A stored enum column held a value this build does not know.
#[derive(Debug, Error)]
#[error("unrecognized {column} value '{value}'")]
pub struct UnknownValue {
    pub column: &'static str,
    pub value: String,
}

/// Column list shared by every query that returns full reports.
pub(crate) const REPORT_COLUMNS: &str = "id, report_type, car_name, model, color, chassis, plate,
     location, phone, image_path, notes, created_at, is_active";

/// Column list shared by every query that returns matches.
pub(crate) const MATCH_COLUMNS: &str = "id, lost_id, sighting_id, rule, created_at";

// ── Report Operations ───────────────────────────────────────────────────────

/// Insert a validated report. Returns the stored row, with its assigned id
/// and creation timestamp.
///
/// Plate and chassis are written exactly as given; callers decide whether
/// they are normalized.
pub fn insert_report(conn: &Connection, report: &NewReport) -> Result<Report, OperationError> {
    conn.execute(
        "INSERT INTO reports (report_type, car_name, model, color, chassis, plate,
             location, phone, image_path, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            report.report_type.as_str(),
            report.car_name,
            report.model,
            report.color,
            report.chassis,
            report.plate,
            report.location,
            report.phone,
            report.image_path,
            report.notes,
        ],
    )?;
    let id = conn.last_insert_rowid();
    find_report(conn, id)?.ok_or_else(|| OperationError::NotFound {
        entity_type: "report".to_string(),
        id: id.to_string(),
    })
}

/// Find a report by id.
pub fn find_report(conn: &Connection, id: i64) -> Result<Option<Report>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM reports WHERE id = ?1",
        REPORT_COLUMNS
    ))?;
    let result = stmt.query_row(params![id], row_to_report);
    match result {
        Ok(r) => Ok(Some(r)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Set a report's active flag.
///
/// Inactive reports stay in storage and in existing matches but no longer
/// take part in new matching or in the "raised" search status.
pub fn set_report_active(
    conn: &Connection,
    id: i64,
    active: bool,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE reports SET is_active = ?2 WHERE id = ?1",
        params![id, active],
    )?;
    if changed == 0 {
        return Err(OperationError::NotFound {
            entity_type: "report".to_string(),
            id: id.to_string(),
        });
    }
    Ok(())
}

// ── Match Operations ────────────────────────────────────────────────────────

/// Check whether a match already exists for the exact triple.
pub fn match_exists(
    conn: &Connection,
    lost_id: i64,
    sighting_id: i64,
    rule: MatchRule,
) -> Result<bool, OperationError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM matches
             WHERE lost_id = ?1 AND sighting_id = ?2 AND rule = ?3)",
        params![lost_id, sighting_id, rule.as_str()],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Insert a match. Returns the generated ID.
///
/// Fails with a constraint error if the triple is already stored; use
/// [`match_exists`] first.
pub fn insert_match(
    conn: &Connection,
    lost_id: i64,
    sighting_id: i64,
    rule: MatchRule,
) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO matches (lost_id, sighting_id, rule) VALUES (?1, ?2, ?3)",
        params![lost_id, sighting_id, rule.as_str()],
    )?;
    Ok(conn.last_insert_rowid())
}

// ── Import Log Operations ───────────────────────────────────────────────────

/// Insert an import log entry. Returns the generated ID.
pub fn insert_import_log(conn: &Connection, log: &ImportLog) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO import_log (source_name, lines_seen, records_created,
             errors_found, matches_found)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            log.source_name,
            log.lines_seen,
            log.records_created,
            log.errors_found,
            log.matches_found,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

// ── Row Mapping ─────────────────────────────────────────────────────────────

pub(crate) fn row_to_report(row: &Row<'_>) -> rusqlite::Result<Report> {
    let kind: String = row.get(1)?;
    Ok(Report {
        id: row.get(0)?,
        report_type: ReportKind::from_db_str(&kind)
            .ok_or_else(|| unknown_value(1, "report_type", kind))?,
        car_name: row.get(2)?,
        model: row.get(3)?,
        color: row.get(4)?,
        chassis: row.get(5)?,
        plate: row.get(6)?,
        location: row.get(7)?,
        phone: row.get(8)?,
        image_path: row.get(9)?,
        notes: row.get(10)?,
        created_at: row.get(11)?,
        is_active: row.get(12)?,
    })
}

pub(crate) fn row_to_match(row: &Row<'_>) -> rusqlite::Result<Match> {
    let rule: String = row.get(3)?;
    Ok(Match {
        id: row.get(0)?,
        lost_id: row.get(1)?,
        sighting_id: row.get(2)?,
        rule: MatchRule::from_db_str(&rule).ok_or_else(|| unknown_value(3, "rule", rule))?,
        created_at: row.get(4)?,
    })
}

fn unknown_value(idx: usize, column: &'static str, value: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        Type::Text,
        Box::new(UnknownValue { column, value }),
    )
}
