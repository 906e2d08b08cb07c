//! Error types for traytrack

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackError>;

#[derive(Error, Debug)]
pub enum TrackError {
    /// Reserved for stricter query validation; `search` never raises it.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A record store call failed during search. Details go to the log only.
    #[error("search failed")]
    SearchUnavailable,

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("order not found: {0}")]
    OrderNotFound(String),

    #[error("reminder not due: {0}")]
    ReminderNotDue(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl TrackError {
    /// Stable machine-readable code for robot output.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidQuery(_) => "invalid_query",
            Self::SearchUnavailable => "search_unavailable",
            Self::Database(_) => "database",
            Self::Io(_) => "io",
            Self::Config(_) | Self::MissingConfig(_) => "config",
            Self::ValidationFailed(_) => "validation_failed",
            Self::OrderNotFound(_) => "not_found",
            Self::ReminderNotDue(_) => "reminder_not_due",
            Self::Serialization(_) => "serialization",
        }
    }
}
