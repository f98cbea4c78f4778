use thiserror::Error;
use wain_catalog::{UploadError, ValidationError};
use wain_db::OperationError;

use crate::matcher::MatchError;

/// Errors surfaced by the report services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input broke a validation rule
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The caller is not an authorized admin
    #[error("Admin authorization required")]
    Unauthorized,

    /// Database operation failed
    #[error("Database error: {0}")]
    Db(#[from] OperationError),

    /// SQLite error outside a store operation
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Match evaluation failed
    #[error("Match engine error: {0}")]
    Match(#[from] MatchError),

    /// Saving an uploaded image failed
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),
}
