//! The generic response envelope.

use serde::Deserialize;

/// The `{ data: T }` wrapper every storefront response body is expected to
/// carry.
///
/// Sibling fields next to `data` are tolerated and ignored; only the payload
/// is interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// The actual payload of the response.
    pub data: T,
}
