//! Injectable error observation.
//!
//! Every failed request is reported exactly once, right before the error
//! propagates to the caller. The default observer writes a structured
//! `tracing` event; tests substitute their own implementation to assert on
//! failures without capturing log output.

use crate::error::ApiError;
use tracing::error;

/// Receives one report per failed request.
pub trait ErrorObserver: Send + Sync {
    /// Called with the endpoint that failed and the error about to be
    /// returned.
    fn on_error(&self, endpoint: &str, error: &ApiError);
}

/// Default observer: emits a `tracing::error!` event per failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ErrorObserver for TracingObserver {
    fn on_error(&self, endpoint: &str, error: &ApiError) {
        error!(endpoint, error = %error, "API request failed");
    }
}
