//! Cart Ledger
//!
//! In-memory quantity store keyed by menu entry id. At most one line per id;
//! a line whose quantity drops to zero or below is removed, never kept.
//!
//! The ledger has no notion of availability. Callers that must refuse
//! unavailable entries (see [`crate::storefront::Storefront::add_to_cart`])
//! check before calling [`CartLedger::add`].

use crate::money::{line_total, to_f64};
use rust_decimal::Decimal;
use shared::models::MenuEntry;
use shared::order::OrderLine;

/// One (entry, quantity) pairing
///
/// `entry` is the snapshot taken on the first add of this id.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub entry: MenuEntry,
    pub quantity: u32,
}

impl CartLine {
    pub fn item_id(&self) -> &str {
        &self.entry.id
    }

    /// `unit_price × quantity` (Decimal, unrounded)
    pub fn line_total(&self) -> Decimal {
        line_total(self.entry.price, self.quantity)
    }

    fn to_order_line(&self) -> OrderLine {
        OrderLine {
            item_id: self.entry.id.clone(),
            name: self.entry.name.clone(),
            quantity: self.quantity,
            unit_price: self.entry.price,
            image: self.entry.image.clone(),
        }
    }
}

/// The customer's cart
///
/// Lines keep insertion order for display stability.
#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, item_id: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.entry.id == item_id)
    }

    /// Add one unit of `entry`. Returns the new quantity of that line.
    pub fn add(&mut self, entry: &MenuEntry) -> u32 {
        let quantity = match self.position(&entry.id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine {
                    entry: entry.clone(),
                    quantity: 1,
                });
                1
            }
        };
        tracing::debug!(item_id = %entry.id, quantity, "Cart add");
        quantity
    }

    /// Remove one unit of `entry`; a line at quantity 1 is deleted.
    /// No-op when the entry has no line. Returns the remaining quantity.
    pub fn remove(&mut self, entry: &MenuEntry) -> u32 {
        let Some(idx) = self.position(&entry.id) else {
            return 0;
        };
        let remaining = if self.lines[idx].quantity > 1 {
            self.lines[idx].quantity -= 1;
            self.lines[idx].quantity
        } else {
            self.lines.remove(idx);
            0
        };
        tracing::debug!(item_id = %entry.id, quantity = remaining, "Cart remove");
        remaining
    }

    /// Add a signed `delta` to the line's quantity and drop the line if the
    /// result is not positive. Returns the resulting quantity.
    ///
    /// A missing line counts as quantity 0. Since there is no entry to build
    /// a new line from, a positive delta on a missing id leaves the ledger
    /// unchanged.
    pub fn set_quantity(&mut self, item_id: &str, delta: i64) -> u32 {
        let Some(idx) = self.position(item_id) else {
            tracing::trace!(item_id, delta, "set_quantity on missing line ignored");
            return 0;
        };
        let next = i64::from(self.lines[idx].quantity).saturating_add(delta);
        if next <= 0 {
            self.lines.remove(idx);
            tracing::debug!(item_id, delta, "Cart line removed");
            return 0;
        }
        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        self.lines[idx].quantity = quantity;
        tracing::debug!(item_id, delta, quantity, "Cart quantity changed");
        quantity
    }

    /// 0 when no line exists
    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.position(item_id)
            .map(|idx| self.lines[idx].quantity)
            .unwrap_or(0)
    }

    /// Sum of `unit_price × quantity`, rounded to 2 decimal places
    pub fn total(&self) -> f64 {
        to_f64(self.total_decimal())
    }

    pub fn total_decimal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities, widened so saturated lines cannot overflow
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn clear(&mut self) {
        if !self.lines.is_empty() {
            tracing::debug!(lines = self.lines.len(), "Cart cleared");
        }
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Frozen copy of the lines for an order payload
    pub fn to_order_lines(&self) -> Vec<OrderLine> {
        self.lines.iter().map(CartLine::to_order_line).collect()
    }
}
