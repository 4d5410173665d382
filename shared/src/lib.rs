//! Shared types for the Campus Canteen workspace
//!
//! Common types used by both the front-end core and the HTTP client:
//! menu models, auth DTOs, order payloads and the unified error system.

pub mod client;
pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Category, MenuEntry, UserRole};
pub use order::{CreatedOrder, OrderLine, OrderPayload};
