//! Error types for the eventdir ecosystem.

use thiserror::Error;

/// Errors that can occur in eventdir operations.
#[derive(Error, Debug)]
pub enum EventDirError {
    #[error("Event is required")]
    MissingEvent,

    #[error("{0}")]
    InvalidInput(String),

    #[error("For the id {0}, no event could be found.")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Lock(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for eventdir operations.
pub type EventDirResult<T> = Result<T, EventDirError>;
