//! SQLite persistence layer for lost and sighting reports.
//!
//! Provides schema creation, the report and match stores, and query APIs
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    OperationError, UnknownValue, find_report, insert_import_log, insert_match, insert_report,
    match_exists, set_report_active,
};
pub use queries::{
    ReportStats, active_reports_by_key, list_import_logs, match_pair, matches_for_lost,
    matches_for_sighting, recent_match_pairs, recent_matches, recent_reports, report_stats,
    reports_by_key,
};
pub use schema::{SchemaError, open_database, open_memory};
