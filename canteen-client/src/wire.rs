//! Backend request bodies that differ from the core's types

use serde::{Deserialize, Serialize};
use shared::order::{OrderLine, OrderPayload};

/// One line of `POST orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub name: String,
    pub qty: u32,
    pub image: String,
    pub price: f64,
    /// Menu entry id
    pub food_item: String,
}

/// Body of `POST orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub name: String,
    pub phone: String,
    pub notes: String,
    pub items: Vec<OrderItemRequest>,
    pub total_amount: f64,
}

impl From<&OrderLine> for OrderItemRequest {
    fn from(line: &OrderLine) -> Self {
        Self {
            name: line.name.clone(),
            qty: line.quantity,
            image: line.image.clone(),
            price: line.unit_price,
            food_item: line.item_id.clone(),
        }
    }
}

impl From<&OrderPayload> for OrderRequest {
    fn from(payload: &OrderPayload) -> Self {
        Self {
            name: payload.customer_name.clone(),
            phone: payload.phone.clone(),
            notes: payload.notes.clone(),
            items: payload.lines.iter().map(OrderItemRequest::from).collect(),
            total_amount: payload.total,
        }
    }
}
