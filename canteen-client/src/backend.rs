//! Core collaborator traits backed by the REST API

use crate::HttpClient;
use async_trait::async_trait;
use canteen_core::backend::{MenuAdmin, MenuSource, OrderBackend};
use shared::error::{AppError, AppResult};
use shared::models::{MenuEntry, MenuEntryCreate, MenuEntryUpdate};
use shared::order::{CreatedOrder, OrderPayload};

#[async_trait]
impl MenuSource for HttpClient {
    async fn fetch_menu(&self) -> AppResult<Vec<MenuEntry>> {
        Ok(self.list_food().await?)
    }
}

#[async_trait]
impl MenuAdmin for HttpClient {
    async fn create_entry(&self, entry: &MenuEntryCreate) -> AppResult<MenuEntry> {
        Ok(self.create_food(entry).await?)
    }

    async fn update_entry(&self, id: &str, update: &MenuEntryUpdate) -> AppResult<MenuEntry> {
        Ok(self.update_food(id, update).await?)
    }

    async fn delete_entry(&self, id: &str) -> AppResult<()> {
        Ok(self.delete_food(id).await?)
    }
}

#[async_trait]
impl OrderBackend for HttpClient {
    /// Transport failures keep their network/timeout code; anything the
    /// backend answered with becomes an order rejection with its message.
    async fn submit_order(&self, payload: &OrderPayload) -> AppResult<CreatedOrder> {
        self.create_order(payload).await.map_err(|e| {
            let err = AppError::from(e);
            if err.is_transport() {
                err
            } else {
                AppError::order_rejected(err.message).with_detail("cause_code", err.code.code())
            }
        })
    }
}
