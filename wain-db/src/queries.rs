//! Read queries for the report database.
//!
//! Provides key lookups for matching and search, match listings,
//! recent-activity views, and statistics.

use rusqlite::{Connection, params};
use wain_catalog::types::*;

use crate::operations::{
    MATCH_COLUMNS, OperationError, REPORT_COLUMNS, find_report, row_to_match, row_to_report,
};

// ── Report Lookups ──────────────────────────────────────────────────────────

/// Active reports of `kind` whose stored `rule` key equals `key` exactly.
pub fn active_reports_by_key(
    conn: &Connection,
    kind: ReportKind,
    rule: MatchRule,
    key: &str,
) -> Result<Vec<Report>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM reports
         WHERE report_type = ?1 AND is_active = 1 AND {} = ?2
         ORDER BY id",
        REPORT_COLUMNS,
        rule.column(),
    ))?;
    let rows = stmt.query_map(params![kind.as_str(), key], row_to_report)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// All reports, of either kind and regardless of activity, carrying `key`.
pub fn reports_by_key(
    conn: &Connection,
    rule: MatchRule,
    key: &str,
) -> Result<Vec<Report>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM reports WHERE {} = ?1 ORDER BY id",
        REPORT_COLUMNS,
        rule.column(),
    ))?;
    let rows = stmt.query_map(params![key], row_to_report)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Most recent reports, newest first.
pub fn recent_reports(conn: &Connection, limit: u32) -> Result<Vec<Report>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM reports ORDER BY created_at DESC, id DESC LIMIT ?1",
        REPORT_COLUMNS,
    ))?;
    let rows = stmt.query_map(params![limit], row_to_report)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Match Lookups ───────────────────────────────────────────────────────────

/// Matches in which `report_id` is the lost side.
pub fn matches_for_lost(conn: &Connection, report_id: i64) -> Result<Vec<Match>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM matches WHERE lost_id = ?1 ORDER BY id",
        MATCH_COLUMNS,
    ))?;
    let rows = stmt.query_map(params![report_id], row_to_match)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Matches in which `report_id` is the sighting side.
pub fn matches_for_sighting(
    conn: &Connection,
    report_id: i64,
) -> Result<Vec<Match>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM matches WHERE sighting_id = ?1 ORDER BY id",
        MATCH_COLUMNS,
    ))?;
    let rows = stmt.query_map(params![report_id], row_to_match)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Most recent matches, newest first.
pub fn recent_matches(conn: &Connection, limit: u32) -> Result<Vec<Match>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM matches ORDER BY created_at DESC, id DESC LIMIT ?1",
        MATCH_COLUMNS,
    ))?;
    let rows = stmt.query_map(params![limit], row_to_match)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Join a match with its lost and sighting reports.
pub fn match_pair(conn: &Connection, record: Match) -> Result<MatchPair, OperationError> {
    let lost = require_report(conn, record.lost_id)?;
    let sighting = require_report(conn, record.sighting_id)?;
    Ok(MatchPair {
        record,
        lost,
        sighting,
    })
}

/// Most recent matches joined with their reports, newest first.
pub fn recent_match_pairs(
    conn: &Connection,
    limit: u32,
) -> Result<Vec<MatchPair>, OperationError> {
    recent_matches(conn, limit)?
        .into_iter()
        .map(|m| match_pair(conn, m))
        .collect()
}

fn require_report(conn: &Connection, id: i64) -> Result<Report, OperationError> {
    find_report(conn, id)?.ok_or_else(|| OperationError::NotFound {
        entity_type: "report".to_string(),
        id: id.to_string(),
    })
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get headline counts: active reports per kind and all matches.
pub fn report_stats(conn: &Connection) -> Result<ReportStats, OperationError> {
    let count_active = |kind: ReportKind| -> Result<i64, rusqlite::Error> {
        conn.query_row(
            "SELECT COUNT(*) FROM reports WHERE report_type = ?1 AND is_active = 1",
            params![kind.as_str()],
            |r| r.get(0),
        )
    };
    let lost_reports = count_active(ReportKind::Lost)?;
    let sighting_reports = count_active(ReportKind::Sighting)?;
    let matches_found: i64 = conn.query_row("SELECT COUNT(*) FROM matches", [], |r| r.get(0))?;

    Ok(ReportStats {
        lost_reports,
        sighting_reports,
        total_reports: lost_reports + sighting_reports,
        matches_found,
    })
}

/// Summary statistics for the report database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStats {
    pub lost_reports: i64,
    pub sighting_reports: i64,
    pub total_reports: i64,
    pub matches_found: i64,
}

// ── Import Log Queries ──────────────────────────────────────────────────────

/// List recent import logs, newest first.
pub fn list_import_logs(conn: &Connection, limit: u32) -> Result<Vec<ImportLog>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, source_name, imported_at, lines_seen, records_created,
                errors_found, matches_found
         FROM import_log ORDER BY id DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit], |row| {
        Ok(ImportLog {
            id: row.get(0)?,
            source_name: row.get(1)?,
            imported_at: row.get(2)?,
            lines_seen: row.get(3)?,
            records_created: row.get(4)?,
            errors_found: row.get(5)?,
            matches_found: row.get(6)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}
