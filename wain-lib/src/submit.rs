//! Single-report submission: validate, store, match.

use rusqlite::Connection;
use wain_catalog::types::{NewReport, Report, ReportKind};
use wain_catalog::uploads::{self, ImageUpload};
use wain_catalog::validate::{SubmissionForm, ValidationError};
use wain_db::operations;

use crate::error::ServiceError;
use crate::matcher::{FoundMatch, find_matches_for};
use crate::settings::Settings;

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Stored; nothing on the other side matches yet.
    Registered { report: Report },
    /// Stored, and at least one opposite report shares a key.
    Matched {
        report: Report,
        matches: Vec<FoundMatch>,
    },
    /// Nothing was stored.
    Rejected(ValidationError),
}

impl SubmissionOutcome {
    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Registered { report } | Self::Matched { report, .. } => Some(report),
            Self::Rejected(_) => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// User-facing summary of the outcome.
    pub fn message(&self) -> String {
        match self {
            Self::Matched { .. } => {
                "Report registered and a match was found. Contact the mediator to complete the handover."
                    .to_string()
            }
            Self::Registered { report } => match report.report_type {
                ReportKind::Lost => {
                    "Lost report registered. A matching sighting will show up in search results."
                        .to_string()
                }
                ReportKind::Sighting => {
                    "Sighting registered. If a matching lost report appears later, it will show up in search results."
                        .to_string()
                }
            },
            Self::Rejected(e) => e.to_string(),
        }
    }
}

/// Validate and store a submission, then run the match engine for it.
///
/// The image is only written once the form has passed validation; a rejected
/// submission leaves no trace in the database or the upload directory.
pub fn submit_report(
    conn: &Connection,
    settings: &Settings,
    kind: ReportKind,
    form: &SubmissionForm,
    image: Option<&ImageUpload>,
) -> Result<SubmissionOutcome, ServiceError> {
    let mut report = match form.validate(kind) {
        Ok(r) => r,
        Err(e) => {
            log::debug!("Rejected {} submission: {}", kind, e);
            return Ok(SubmissionOutcome::Rejected(e));
        }
    };

    report.image_path = uploads::save_image(&settings.upload_dir, image)?;
    register_report(conn, &report)
}

/// Store an already validated report and run the match engine for it.
pub fn register_report(
    conn: &Connection,
    report: &NewReport,
) -> Result<SubmissionOutcome, ServiceError> {
    let stored = operations::insert_report(conn, report)?;
    log::info!(
        "Registered {} report #{} ({})",
        stored.report_type,
        stored.id,
        stored.car_name,
    );

    let matches = find_matches_for(conn, &stored)?;
    if matches.is_empty() {
        Ok(SubmissionOutcome::Registered { report: stored })
    } else {
        Ok(SubmissionOutcome::Matched {
            report: stored,
            matches,
        })
    }
}
