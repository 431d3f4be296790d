//! Error types for the Palm Haven site

use thiserror::Error;

/// Main error type for site operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// A booking field was empty or unparseable after form validation
    #[error("Incomplete booking: {0}")]
    IncompleteBooking(String),

    /// Arrival date could not be parsed as an ISO date
    #[error("Invalid arrival date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    /// Embedded review content failed to decode
    #[error("Review content error: {0}")]
    Content(#[from] serde_json::Error),

    /// A contact number failed the 10-digit requirement
    #[error("Invalid contact number: {0}")]
    InvalidNumber(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;
