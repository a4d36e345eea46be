//! Custom error types for finreport
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for finreport operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// A fetch was triggered before any month was chosen
    #[error("Please select a month")]
    NoSelection,

    /// A fetch was triggered while another one is still pending
    #[error("A report request is already in progress")]
    FetchInFlight,

    /// The report service answered, but not with a usable report
    #[error("Failed to fetch report: {message}")]
    FetchFailed {
        status: Option<u16>,
        message: String,
    },

    /// The report service could not be reached at all
    #[error("Unable to reach the report service at {base_url}: {detail}")]
    ServiceUnreachable { base_url: String, detail: String },

    /// Capturing the report or writing the document failed
    #[error("Export error: {0}")]
    ExportFailed(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ReportError {
    /// Create a fetch failure for a non-success HTTP status
    pub fn http_status(status: u16) -> Self {
        Self::FetchFailed {
            status: Some(status),
            message: format!("report service returned HTTP {}", status),
        }
    }

    /// Whether this error came from talking to the report service
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::FetchFailed { .. } | Self::ServiceUnreachable { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finreport operations
pub type ReportResult<T> = Result<T, ReportError>;
