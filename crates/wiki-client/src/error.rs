//! Errors from talking to the MediaWiki API.

use thiserror::Error;

/// Failure of a single wiki API call. "No results" is never an error; it is an empty value.
#[derive(Error, Debug)]
pub enum WikiError {
    /// Connection, TLS, or timeout failure.
    #[error("wiki request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-200 status.
    #[error("wiki API returned HTTP {0}")]
    Status(u16),

    /// The body was not the JSON shape we expect.
    #[error("wiki response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WikiError>;
