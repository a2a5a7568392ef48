// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Why a single page request could not be turned into job records.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("API request failed: {0}")]
    Transport(reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    // The request URL carries the API key in its query string.
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.without_url())
    }
}
