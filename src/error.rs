//! Error types for the storefront API client.

use thiserror::Error;

/// Result type for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the storefront API.
///
/// The client performs no recovery: every failure is reported once to the
/// configured [`ErrorObserver`](crate::observer::ErrorObserver) and then
/// propagated unchanged to the caller, which owns all retry and
/// user-messaging decisions.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status code.
    #[error("HTTP error! status: {status}")]
    Status {
        /// The exact status code the server returned.
        status: u16,
    },

    /// The request failed below the HTTP layer (connect, send) or the
    /// response body could not be decoded as JSON.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A caller-supplied request body could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// The status code, when the server produced a response at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Serialization(_) => None,
        }
    }
}
