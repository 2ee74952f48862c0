//! Listing fetch errors.

use thiserror::Error;

use crate::traits::HttpError;

/// Why a listing fetch failed.
///
/// The loader collapses every variant into `LoadStatus::Error`; the detail
/// exists for logging and for callers that use a source directly.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure before a response arrived.
    #[error("request failed: {0}")]
    Http(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("server returned status {status}")]
    Status { status: u16 },

    /// The body was not a JSON array of listings.
    #[error("malformed listing payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Anything else a custom source wants to report.
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Short code for log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Http(HttpError::Timeout(_)) => "E_FETCH_TIMEOUT",
            FetchError::Http(_) => "E_FETCH_HTTP",
            FetchError::Status { .. } => "E_FETCH_STATUS",
            FetchError::Decode(_) => "E_FETCH_DECODE",
            FetchError::Other(_) => "E_FETCH_OTHER",
        }
    }
}
