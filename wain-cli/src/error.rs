use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Wrong admin password, or none configured
    #[error("Admin authorization failed")]
    Unauthorized,

    /// Input rejected by validation
    #[error("{0}")]
    Invalid(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl From<wain_lib::ServiceError> for CliError {
    fn from(e: wain_lib::ServiceError) -> Self {
        use wain_lib::ServiceError;
        match e {
            ServiceError::Validation(v) => Self::invalid(v.to_string()),
            ServiceError::Unauthorized => Self::Unauthorized,
            ServiceError::Upload(u) => Self::other(u.to_string()),
            other => Self::database(other.to_string()),
        }
    }
}

impl From<wain_import::ImportError> for CliError {
    fn from(e: wain_import::ImportError) -> Self {
        use wain_import::ImportError;
        match e {
            ImportError::Validation(v) => Self::invalid(v.to_string()),
            ImportError::Unauthorized => Self::Unauthorized,
            other => Self::database(other.to_string()),
        }
    }
}
