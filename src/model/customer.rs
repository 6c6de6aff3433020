//! The Customer DTO.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The purchaser embedded in an [`OrderRequest`](crate::model::OrderRequest).
///
/// The backend defines its shape; the client treats it as an opaque JSON
/// value and forwards it unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Customer(pub Value);

impl From<Value> for Customer {
    fn from(value: Value) -> Self {
        Customer(value)
    }
}
