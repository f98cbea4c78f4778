//! Bulk import of pasted report lines into the report database.
//!
//! Each line is parsed, validated, stored and run through the match engine
//! on its own, so one bad line never blocks the rest of the batch.

pub mod bulk;
pub mod progress;

pub use bulk::{
    BulkImportResult, BulkOptions, ImportError, LineError, guarded_bulk_import, import_bulk,
    parse_line,
};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
