//! Error types for the fdash-core library.
//!
//! Signal extraction itself is infallible; these errors only cover payload
//! decoding, session state and configuration I/O.

use thiserror::Error;

/// Main error type for the fdash library.
#[derive(Error, Debug)]
pub enum FdashError {
    /// Analysis payload error.
    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),

    /// Analysis session error.
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to analysis payloads.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// The payload is not valid JSON for the expected shape.
    #[error("invalid analysis payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The idea description is blank.
    #[error("startup idea description is empty")]
    MissingIdea,
}

/// Errors related to the analysis session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// An analysis request is already pending.
    #[error("an analysis request is already in flight")]
    RequestInFlight,

    /// No analysis report has been loaded yet.
    #[error("no analysis report loaded")]
    NoReport,
}

/// Result type for the fdash library.
pub type Result<T> = std::result::Result<T, FdashError>;
