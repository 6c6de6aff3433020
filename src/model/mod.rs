//! Pure data-transfer shapes (DTOs) for storefront API bodies.
//!
//! The client owns none of these values. Each one is decoded from a response
//! (or serialized into a request) and handed straight to the caller; no
//! references are retained afterward.

pub mod customer;
pub mod envelope;
pub mod order;
pub mod product;

pub use customer::*;
pub use envelope::*;
pub use order::*;
pub use product::*;
