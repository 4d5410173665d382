//! Canteen Client - HTTP client for the canteen REST backend
//!
//! Provides the network side of the core's collaborator traits
//! ([`MenuSource`](canteen_core::MenuSource), [`MenuAdmin`](canteen_core::MenuAdmin),
//! [`OrderBackend`](canteen_core::OrderBackend)) plus the auth endpoints.

mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod wire;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};
