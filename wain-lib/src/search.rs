//! Plate / chassis lookup.
//!
//! A search answers two questions about a key: is an active lost report
//! raised for it, and has any match been recorded that involves a report
//! carrying it.

use std::collections::HashSet;

use rusqlite::Connection;
use wain_catalog::normalize::normalize;
use wain_catalog::types::{Match, MatchRule, Mediator, Report, ReportKind, SearchMode};
use wain_catalog::validate::ValidationError;
use wain_db::queries;

use crate::error::ServiceError;
use crate::settings::Settings;

/// Overall answer for a searched key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    /// No active lost report and no match.
    Clear,
    /// An active lost report carries the key, with no recorded match.
    Raised,
    /// At least one recorded match involves a report carrying the key.
    Matched,
}

/// One matched pair, with the mediator to contact about it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SearchHit {
    pub rule: MatchRule,
    pub lost: Report,
    pub sighting: Report,
    pub mediator: Mediator,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SearchOutcome {
    pub mode: SearchMode,
    /// The normalized key that was looked up.
    pub key: String,
    pub status: SearchStatus,
    pub hits: Vec<SearchHit>,
}

/// Look up a raw plate or chassis value.
pub fn search(
    conn: &Connection,
    settings: &Settings,
    mode: SearchMode,
    raw: &str,
) -> Result<SearchOutcome, ServiceError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::EmptySearch.into());
    }

    let field = mode.field();
    let key = normalize(raw);

    let lost = queries::active_reports_by_key(conn, ReportKind::Lost, field, &key)?;
    let mut status = if lost.is_empty() {
        SearchStatus::Clear
    } else {
        SearchStatus::Raised
    };

    let mut seen = HashSet::new();
    let mut records: Vec<Match> = Vec::new();
    for report in queries::reports_by_key(conn, field, &key)? {
        let matches = match report.report_type {
            ReportKind::Lost => queries::matches_for_lost(conn, report.id)?,
            ReportKind::Sighting => queries::matches_for_sighting(conn, report.id)?,
        };
        for m in matches {
            if seen.insert(m.triple()) {
                records.push(m);
            }
        }
    }

    let mut hits = Vec::with_capacity(records.len());
    if !records.is_empty() {
        status = SearchStatus::Matched;
        let mediator = settings.mediator();
        for record in records {
            let rule = record.rule;
            let pair = queries::match_pair(conn, record)?;
            hits.push(SearchHit {
                rule,
                lost: pair.lost,
                sighting: pair.sighting,
                mediator: mediator.clone(),
            });
        }
    }

    log::debug!("Search {:?} '{}' -> {:?} ({} hits)", mode, key, status, hits.len());

    Ok(SearchOutcome {
        mode,
        key,
        status,
        hits,
    })
}
