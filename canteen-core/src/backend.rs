//! Backend collaborator seams
//!
//! The core never talks HTTP itself. Hosts hand it implementations of these
//! traits (the `canteen-client` crate provides the REST ones; tests use
//! in-memory fakes).

use async_trait::async_trait;
use shared::error::AppResult;
use shared::models::{MenuEntry, MenuEntryCreate, MenuEntryUpdate};
use shared::order::{CreatedOrder, OrderPayload};

/// Supplies the menu at session start
#[async_trait]
pub trait MenuSource: Send + Sync {
    async fn fetch_menu(&self) -> AppResult<Vec<MenuEntry>>;
}

/// Menu mutations performed by a restaurant partner
///
/// Each call returns the entry as stored by the backend so the caller can
/// replace its local copy by id.
#[async_trait]
pub trait MenuAdmin: Send + Sync {
    async fn create_entry(&self, entry: &MenuEntryCreate) -> AppResult<MenuEntry>;

    async fn update_entry(&self, id: &str, update: &MenuEntryUpdate) -> AppResult<MenuEntry>;

    async fn delete_entry(&self, id: &str) -> AppResult<()>;
}

/// Accepts a snapshotted order
#[async_trait]
pub trait OrderBackend: Send + Sync {
    async fn submit_order(&self, payload: &OrderPayload) -> AppResult<CreatedOrder>;
}
