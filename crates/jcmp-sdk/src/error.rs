use std::fmt;

use thiserror::Error;

/// Which of the two direct-mode inputs an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputLabel {
    /// The first document.
    First,
    /// The second document.
    Second,
}

impl fmt::Display for InputLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("First JSON"),
            Self::Second => f.write_str("Second JSON"),
        }
    }
}

/// Errors produced while acquiring the two documents of a comparison.
///
/// The diff itself is total and cannot fail; every failure happens before
/// it runs.
#[derive(Debug, Error)]
pub enum CompareError {
    /// A URL failed syntactic validation. Raised before any I/O.
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport failure, non-success status, or an unreadable body.
    #[error("failed to fetch from {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The response did not declare a JSON content type.
    #[error("URL did not return JSON: {url} (content type {content_type:?})")]
    ContentType { url: String, content_type: String },

    /// A direct-mode input is not valid JSON.
    #[error("invalid JSON in {label}: {reason}")]
    Parse { label: InputLabel, reason: String },
}

/// Convenience alias for comparison results.
pub type CompareResult<T> = Result<T, CompareError>;
