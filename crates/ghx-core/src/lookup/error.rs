//! Lookup error type. The explorer flow collapses every variant into one
//! user-facing message; the variants exist for logging and tests.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    /// Base URL did not parse or cannot carry path segments.
    #[error("invalid lookup base URL {url:?}")]
    InvalidBaseUrl { url: String },
    /// Curl reported an error (timeout, connection, DNS, etc.).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Status(u32),
    /// 2xx body was not a repository record.
    #[error("decode repository: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::Status(404))
    }
}
