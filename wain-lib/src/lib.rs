//! Matching engine and services for lost and sighting vehicle reports.
//!
//! Every entry point takes an explicit database connection and, where it
//! needs configuration, a [`Settings`] value built once at startup.

pub mod admin;
pub mod error;
pub mod matcher;
pub mod search;
pub mod settings;
pub mod sheet;
pub mod submit;

pub use admin::{
    AdminGuard, AdminToken, DASHBOARD_LIMIT, Dashboard, RequestContext, dashboard,
    deactivate_report, reactivate_report,
};
pub use error::ServiceError;
pub use matcher::{FoundMatch, MatchError, find_matches_for};
pub use search::{SearchHit, SearchOutcome, SearchStatus, search};
pub use settings::{SettingSource, SettingSources, Settings, SettingsError};
pub use sheet::{SHEET_COLUMNS, SheetError, SheetResponse, SheetRow, add_sheet_report, append_row};
pub use submit::{SubmissionOutcome, register_report, submit_report};
pub use wain_db::ReportStats;

/// Headline counts for the landing view: active reports and all matches.
pub fn report_stats(conn: &rusqlite::Connection) -> Result<ReportStats, ServiceError> {
    Ok(wain_db::report_stats(conn)?)
}
