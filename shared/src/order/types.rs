//! Order payload types exchanged with the order backend

use serde::{Deserialize, Serialize};

/// Number of trailing id characters shown to the customer as the order number
pub const ORDER_NUMBER_LEN: usize = 6;

/// One ordered menu item, frozen at submission time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Menu entry id
    pub item_id: String,
    /// Name snapshot
    pub name: String,
    pub quantity: u32,
    /// Unit price snapshot
    pub unit_price: f64,
    /// Image snapshot (the backend stores it alongside the line)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
}

/// Immutable order payload built from the cart when submission begins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub lines: Vec<OrderLine>,
    /// Sum of `unit_price × quantity`, rounded to 2 decimal places
    pub total: f64,
    pub customer_name: String,
    pub phone: String,
    #[serde(default)]
    pub notes: String,
}

impl OrderPayload {
    /// Total number of units across all lines
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

/// Created order as acknowledged by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedOrder {
    #[serde(alias = "_id")]
    pub id: String,
}

impl CreatedOrder {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Short order number shown on the confirmation screen (last 6 characters of the id)
    pub fn order_number(&self) -> String {
        let count = self.id.chars().count();
        self.id
            .chars()
            .skip(count.saturating_sub(ORDER_NUMBER_LEN))
            .collect()
    }
}
