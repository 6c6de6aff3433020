//! # Observability & Tracing
//!
//! Subscriber setup for binaries and examples embedding this client.
//!
//! The client itself only emits `tracing` events and spans; it never
//! installs a subscriber. Call [`setup_tracing`] once from your entry point
//! if nothing else in the process does it.
//!
//! ## What Gets Traced
//!
//! - **Requests**: method and URL at `debug` level before each send.
//! - **Operations**: one span per client method (`get_products`,
//!   `create_order`, ...) via `#[instrument]`.
//! - **Failures**: one `error` event per failed request, emitted by the
//!   default [`TracingObserver`](crate::observer::TracingObserver).
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show request URLs and full order payloads
//! RUST_LOG=debug cargo run
//! ```

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
