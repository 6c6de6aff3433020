//! # Storefront Client
//!
//! > **A typed, stateless client for the storefront web API.**
//!
//! This crate wraps the storefront backend's HTTP surface (products, orders,
//! health check) in typed async methods. Every call is a direct pass-through:
//! build a URL, issue a request, decode the `{ data: T }` envelope, return the
//! unwrapped value. There is no caching, no retry, and no state held between
//! calls.
//!
//! ## Architecture Notes
//!
//! ### 1. No Global Singleton
//! The client is an explicit value. Construct one [`ApiClient`] at your
//! composition root and pass it (or a cheap clone) wherever it is needed.
//! This keeps process-wide state out of the picture and makes the transport
//! substitutable in tests.
//!
//! ### 2. Type-Safe Error Handling
//! All failures surface as [`ApiError`]: a non-2xx response carries its exact
//! status code, and anything below the HTTP layer (connect, send, body decode)
//! is a transport error. The client never recovers on its own; retry and
//! backoff decisions belong to the caller.
//!
//! ### 3. Concurrency Model
//! Methods are plain async functions over a shared connection pool. Concurrent
//! calls are fully independent; there is no serialization, coalescing, or
//! shared mutable state, so no locks are needed.
//!
//! ### 4. Observability
//! We use `tracing` with structured fields on every operation. Failed requests
//! are additionally reported once to an injectable [`ErrorObserver`] before
//! they propagate, so tests can assert on failures without capturing log
//! output. See the [`telemetry`] module for subscriber setup.
//!
//! ## Module Tour
//!
//! - [`client`]: the [`ApiClient`] itself, plus the per-call
//!   [`RequestOptions`] overrides.
//! - [`model`]: pure data-transfer shapes: [`Product`], [`Order`],
//!   [`OrderRequest`], [`Customer`], and the [`ApiResponse`] envelope.
//! - [`config`]: base-URL resolution (environment override, else default).
//! - [`error`]: the [`ApiError`] taxonomy.
//! - [`observer`]: the [`ErrorObserver`] seam and its `tracing`-backed
//!   default.
//!
//! ## Quick Start
//!
//! ```ignore
//! let client = ApiClient::new();
//! let products = client.get_products().await?;
//! let order = client.create_order(&order_request).await?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod observer;
pub mod telemetry;

pub use client::{ApiClient, RequestOptions};
pub use error::{ApiError, ApiResult};
pub use model::{
    ApiResponse, Customer, Order, OrderItem, OrderList, OrderRequest, Product, ProductList,
};
pub use observer::{ErrorObserver, TracingObserver};
