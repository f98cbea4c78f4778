//! Exact-key matching between lost and sighting reports.
//!
//! A freshly stored report is compared against every *active* report of the
//! opposite kind. Plate and chassis are independent rules: a pair sharing
//! both keys yields two matches. New matches are written in one transaction
//! after the scan; matches already on record are reported but not re-inserted.

use rusqlite::Connection;
use thiserror::Error;
use wain_catalog::types::{MatchRule, Report, ReportKind};
use wain_db::operations::{self, OperationError};
use wain_db::queries;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// One (rule, counterpart) pair found for a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundMatch {
    pub rule: MatchRule,
    /// The opposite-kind report sharing the key.
    pub other: Report,
    pub lost_id: i64,
    pub sighting_id: i64,
    /// False when the match was already on record before this evaluation.
    pub created: bool,
}

/// Rules in evaluation order.
const RULES: [MatchRule; 2] = [MatchRule::Plate, MatchRule::Chassis];

/// Find and record matches for a stored report.
///
/// Returns every match found, including ones that already existed, so the
/// caller can report "matched" regardless of novelty. No matches is an empty
/// vector, not an error.
pub fn find_matches_for(
    conn: &Connection,
    report: &Report,
) -> Result<Vec<FoundMatch>, MatchError> {
    let opposite = report.report_type.opposite();

    let mut candidates = Vec::new();
    for rule in RULES {
        let Some(key) = report.key(rule) else {
            continue;
        };
        for other in queries::active_reports_by_key(conn, opposite, rule, key)? {
            candidates.push((rule, other));
        }
    }

    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let tx = conn.unchecked_transaction()?;
    let mut found = Vec::with_capacity(candidates.len());

    for (rule, other) in candidates {
        let (lost_id, sighting_id) = match report.report_type {
            ReportKind::Lost => (report.id, other.id),
            ReportKind::Sighting => (other.id, report.id),
        };

        let created = if operations::match_exists(&tx, lost_id, sighting_id, rule)? {
            false
        } else {
            operations::insert_match(&tx, lost_id, sighting_id, rule)?;
            true
        };

        found.push(FoundMatch {
            rule,
            other,
            lost_id,
            sighting_id,
            created,
        });
    }

    tx.commit()?;

    let new = found.iter().filter(|m| m.created).count();
    log::info!(
        "Report #{} ({}): {} match(es), {} new",
        report.id,
        report.report_type,
        found.len(),
        new,
    );

    Ok(found)
}
