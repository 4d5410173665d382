//! Menu browsing
//!
//! - **filter**: category chip + search query over menu entries
//! - **catalog**: the loaded menu, with by-id replacement for partner edits
//! - **seed**: built-in menu used as a fallback

pub mod catalog;
pub mod filter;
pub mod seed;

// Re-exports
pub use catalog::{CatalogOrigin, CatalogStats, MenuCatalog, MenuView};
pub use filter::{ALL_CATEGORIES, CategoryFilter, MenuFilter, filter};
pub use seed::seed_menu;
