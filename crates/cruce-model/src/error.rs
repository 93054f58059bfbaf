//! Error types shared across the cruce crates.

use thiserror::Error;

/// Errors surfaced when loading requests or writing reports.
///
/// Validation problems are never errors in this sense; they travel as
/// [`Finding`](crate::finding::Finding) values inside a normal result.
#[derive(Debug, Error)]
pub enum CruceError {
    /// I/O failure while reading a request or writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a request or report payload.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error with a message.
    #[error("{0}")]
    Message(String),
}

/// Convenience result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CruceError>;
