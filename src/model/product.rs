//! The Product DTO and its collection shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product as returned by the backend.
///
/// Only the `id` is interpreted by the client; every other attribute the
/// server sends is carried opaquely in `rest`, so the caller sees exactly
/// what came over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier assigned by the backend.
    pub id: String,
    /// All remaining attributes, unmodified.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Collection shape under the envelope of `GET /api/products`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductList {
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_unknown_attributes() {
        let product: Product =
            serde_json::from_str(r#"{"id":"p1","name":"Pumpkin Lantern","price":12.5}"#).unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.rest["name"], "Pumpkin Lantern");
        assert_eq!(product.rest["price"], 12.5);
    }
}
