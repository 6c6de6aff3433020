//! Order DTOs: the record returned by the backend and the creation payload.

use crate::model::Customer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An order as returned by the backend. Opaque beyond its `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier assigned by the backend.
    pub id: String,
    /// All remaining attributes, unmodified.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Collection shape under the envelope of `GET /api/orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderList {
    pub orders: Vec<Order>,
}

/// A single line of an [`OrderRequest`]. Field names are camelCase on the
/// wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
}

/// Payload for `POST /api/orders`, serialized verbatim as the request body.
///
/// The client does not validate quantities, prices, or the total; the server
/// owns all validation and surfaces failures as 4xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_request_serializes_in_declaration_order() {
        let request = OrderRequest {
            customer: Customer(json!({"name": "Alice", "email": "alice@example.com"})),
            items: vec![OrderItem {
                product_id: "p1".to_string(),
                quantity: 2,
                price: 5.0,
            }],
            total: 10.0,
        };

        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"customer":{"name":"Alice","email":"alice@example.com"},"items":[{"productId":"p1","quantity":2,"price":5.0}],"total":10.0}"#
        );
    }

    #[test]
    fn order_items_use_camel_case_on_the_wire() {
        let item = OrderItem {
            product_id: "p9".to_string(),
            quantity: 1,
            price: 3.25,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["productId"], "p9");
        assert!(value.get("product_id").is_none());
    }
}
