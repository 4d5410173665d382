//! Order module
//!
//! Types describing an order once it leaves the cart: the immutable payload
//! sent to the order backend and the backend's acknowledgement.

pub mod types;

// Re-exports
pub use types::*;
