//! Data models
//!
//! Shared between the front-end core and the HTTP client.
//! IDs are backend document ids (strings).

pub mod menu;
pub mod role;

// Re-exports
pub use menu::*;
pub use role::*;
