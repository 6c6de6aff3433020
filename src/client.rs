//! # The Storefront API Client
//!
//! This module defines [`ApiClient`], the single component of the crate.
//!
//! ## Key Types
//!
//! - [`ApiClient`]: typed wrappers over the storefront endpoints.
//! - [`RequestOptions`]: per-call method/header/body overrides for the
//!   generic [`ApiClient::request`] helper.
//!
//! ## Architecture Note
//!
//! Every typed method funnels through one generic `request` helper, so the
//! envelope unwrapping, error mapping, and failure reporting are written
//! once. The methods themselves stay one-liners: pick an endpoint, pick a
//! payload type, return the field the caller asked for.

use crate::config;
use crate::error::{ApiError, ApiResult};
use crate::model::{ApiResponse, Order, OrderList, OrderRequest, Product, ProductList};
use crate::observer::{ErrorObserver, TracingObserver};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Per-call overrides for [`ApiClient::request`].
///
/// Defaults to a bare GET with no extra headers and no body. Caller-supplied
/// headers are merged over the client's `Content-Type: application/json`, so
/// a caller header with the same name wins. The body, when present, is sent
/// exactly as given.
#[derive(Debug, Default, Clone)]
pub struct RequestOptions {
    /// HTTP method; `None` means GET.
    pub method: Option<Method>,
    /// Extra headers, merged over the client's defaults.
    pub headers: HeaderMap,
    /// Pre-serialized request body.
    pub body: Option<String>,
}

/// Typed client for the storefront API.
///
/// Stateless: every call opens its own request on the shared connection pool
/// and holds nothing across calls, so concurrent calls never interact.
/// Construct one at the composition root and pass it (or a clone) wherever
/// it is needed.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    observer: Arc<dyn ErrorObserver>,
}

impl ApiClient {
    /// Creates a client targeting the configured base URL: the
    /// `STOREFRONT_API_URL` environment variable, else the documented
    /// default.
    pub fn new() -> Self {
        Self::with_base_url(config::resolve_base_url())
    }

    /// Creates a client targeting an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replaces the error observer. The default logs via `tracing`.
    pub fn with_observer(mut self, observer: Arc<dyn ErrorObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The base URL this client resolves endpoints against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a request against `{base_url}{endpoint}` and decodes the
    /// response envelope.
    ///
    /// On a 2xx status the body is decoded as [`ApiResponse<T>`]. A non-2xx
    /// status yields [`ApiError::Status`] carrying the exact code; a network
    /// or decode failure yields [`ApiError::Transport`]. Either way the
    /// failure is reported once to the observer before it propagates. No
    /// retry, no recovery.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<ApiResponse<T>> {
        match self.dispatch(endpoint, options).await {
            Ok(envelope) => Ok(envelope),
            Err(e) => {
                self.observer.on_error(endpoint, &e);
                Err(e)
            }
        }
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<ApiResponse<T>> {
        let url = format!("{}{}", self.base_url, endpoint);
        let method = options.method.unwrap_or(Method::GET);
        debug!(%method, %url, "Sending request");

        // Defaults first, then caller headers; extend replaces on conflict.
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        let mut builder = self.http.request(method, &url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let envelope = response.json::<ApiResponse<T>>().await?;
        Ok(envelope)
    }

    // --- Product endpoints ---

    /// Fetches the full product catalog.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> ApiResult<Vec<Product>> {
        let response = self
            .request::<ProductList>("/api/products", RequestOptions::default())
            .await?;
        Ok(response.data.products)
    }

    /// Fetches a single product by id. An unknown id surfaces as the
    /// server's 404.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ApiResult<Product> {
        let endpoint = format!("/api/products/{id}");
        let response = self
            .request::<Product>(&endpoint, RequestOptions::default())
            .await?;
        Ok(response.data)
    }

    // --- Order endpoints ---

    /// Submits a new order.
    ///
    /// The payload is serialized verbatim as the POST body. Quantities,
    /// prices, and the total are not checked client-side; the server owns
    /// validation and surfaces failures as 4xx responses.
    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: &OrderRequest) -> ApiResult<Order> {
        debug!(?order, "create_order called");
        let options = RequestOptions {
            method: Some(Method::POST),
            body: Some(serde_json::to_string(order)?),
            ..RequestOptions::default()
        };
        let response = self.request::<Order>("/api/orders", options).await?;
        Ok(response.data)
    }

    /// Fetches all orders.
    #[instrument(skip(self))]
    pub async fn get_orders(&self) -> ApiResult<Vec<Order>> {
        let response = self
            .request::<OrderList>("/api/orders", RequestOptions::default())
            .await?;
        Ok(response.data.orders)
    }

    /// Fetches a single order by id.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: &str) -> ApiResult<Order> {
        let endpoint = format!("/api/orders/{id}");
        let response = self
            .request::<Order>(&endpoint, RequestOptions::default())
            .await?;
        Ok(response.data)
    }

    // --- Health ---

    /// Hits the health endpoint. The payload shape is intentionally
    /// unconstrained, so the raw JSON value is returned.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> ApiResult<Value> {
        let response = self
            .request::<Value>("/health", RequestOptions::default())
            .await?;
        Ok(response.data)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
