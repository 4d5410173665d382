//! Checkout Flow
//!
//! ```text
//! Browsing ──open_cart──▶ CartOpen ──proceed──▶ OrderDetailsOpen ──begin_submit──▶ Submitting
//!    ▲                       │                        │      ▲                        │
//!    └──────close_cart───────┘                        │      └──────── failure ───────┤
//!    ▲◀───────────────────────cancel──────────────────┘                               │
//!    └──────────────dismiss────────────── Confirmed ◀──────── success ────────────────┘
//! ```
//!
//! Entering `Submitting` snapshots the cart into an [`OrderPayload`]. Only a
//! successful submission clears the cart; a failure returns to
//! `OrderDetailsOpen` with the entered details intact.

mod error;

pub use error::{CheckoutError, CheckoutResult};

use crate::backend::OrderBackend;
use crate::cart::CartLedger;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::order::{CreatedOrder, OrderPayload};
use shared::util::now_millis;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    #[default]
    Browsing,
    CartOpen,
    OrderDetailsOpen,
    Submitting,
    Confirmed,
}

impl fmt::Display for CheckoutState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CheckoutState::Browsing => "browsing",
            CheckoutState::CartOpen => "cart open",
            CheckoutState::OrderDetailsOpen => "entering order details",
            CheckoutState::Submitting => "submitting",
            CheckoutState::Confirmed => "confirmed",
        };
        f.write_str(s)
    }
}

/// Customer details entered on the order form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub name: String,
    pub phone: String,
    pub notes: String,
}

impl OrderDetails {
    /// Name and phone must be non-blank
    pub fn validate(&self) -> CheckoutResult<()> {
        if self.name.trim().is_empty() {
            return Err(CheckoutError::MissingField("name"));
        }
        if self.phone.trim().is_empty() {
            return Err(CheckoutError::MissingField("phone"));
        }
        Ok(())
    }
}

/// Result of a finished submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Confirmed(CreatedOrder),
    /// Backend refused or was unreachable; back on the details form
    Rejected(AppError),
}

#[derive(Debug, Clone, Default)]
pub struct CheckoutFlow {
    state: CheckoutState,
    details: OrderDetails,
    in_flight: Option<OrderPayload>,
    submit_started_at: Option<i64>,
    confirmation: Option<CreatedOrder>,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CheckoutState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == CheckoutState::Submitting
    }

    pub fn details(&self) -> &OrderDetails {
        &self.details
    }

    /// Form fields, editable while the details form is shown
    pub fn details_mut(&mut self) -> CheckoutResult<&mut OrderDetails> {
        self.ensure_state(CheckoutState::OrderDetailsOpen, "edit order details")?;
        Ok(&mut self.details)
    }

    /// Payload currently awaiting the backend
    pub fn in_flight(&self) -> Option<&OrderPayload> {
        self.in_flight.as_ref()
    }

    /// Order shown on the confirmation screen
    pub fn confirmation(&self) -> Option<&CreatedOrder> {
        self.confirmation.as_ref()
    }

    fn ensure_state(&self, state: CheckoutState, action: &'static str) -> CheckoutResult<()> {
        if self.state == CheckoutState::Submitting && state != CheckoutState::Submitting {
            return Err(CheckoutError::SubmissionInFlight);
        }
        if self.state != state {
            return Err(CheckoutError::InvalidTransition {
                from: self.state,
                action,
            });
        }
        Ok(())
    }

    fn transition(&mut self, to: CheckoutState) {
        tracing::debug!(from = %self.state, to = %to, "Checkout transition");
        self.state = to;
    }

    pub fn open_cart(&mut self) -> CheckoutResult<()> {
        self.ensure_state(CheckoutState::Browsing, "open cart")?;
        self.transition(CheckoutState::CartOpen);
        Ok(())
    }

    pub fn close_cart(&mut self) -> CheckoutResult<()> {
        self.ensure_state(CheckoutState::CartOpen, "close cart")?;
        self.transition(CheckoutState::Browsing);
        Ok(())
    }

    /// Checkout button in the cart
    pub fn proceed_to_details(&mut self, cart: &CartLedger) -> CheckoutResult<()> {
        self.ensure_state(CheckoutState::CartOpen, "proceed to checkout")?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.transition(CheckoutState::OrderDetailsOpen);
        Ok(())
    }

    /// Close the details form; entered fields are kept
    pub fn cancel_details(&mut self) -> CheckoutResult<()> {
        self.ensure_state(CheckoutState::OrderDetailsOpen, "cancel order")?;
        self.transition(CheckoutState::Browsing);
        Ok(())
    }

    /// Validate the form and snapshot the cart.
    ///
    /// On success the flow is `Submitting` and the returned payload is what
    /// must be sent; later cart edits do not affect it.
    pub fn begin_submit(&mut self, cart: &CartLedger) -> CheckoutResult<OrderPayload> {
        self.ensure_state(CheckoutState::OrderDetailsOpen, "submit order")?;
        self.details.validate()?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let payload = OrderPayload {
            lines: cart.to_order_lines(),
            total: cart.total(),
            customer_name: self.details.name.trim().to_string(),
            phone: self.details.phone.trim().to_string(),
            notes: self.details.notes.clone(),
        };
        self.in_flight = Some(payload.clone());
        self.submit_started_at = Some(now_millis());
        self.transition(CheckoutState::Submitting);
        tracing::info!(
            items = payload.item_count(),
            total = payload.total,
            "Submitting order"
        );
        Ok(payload)
    }

    /// Apply the backend's answer to an in-flight submission
    pub fn complete_submit(
        &mut self,
        result: AppResult<CreatedOrder>,
        cart: &mut CartLedger,
    ) -> CheckoutResult<SubmissionOutcome> {
        self.ensure_state(CheckoutState::Submitting, "complete submission")?;
        self.in_flight = None;
        let elapsed_ms = self
            .submit_started_at
            .take()
            .map(|started| now_millis() - started);

        match result {
            Ok(order) => {
                tracing::info!(
                    order_id = %order.id,
                    order_number = %order.order_number(),
                    elapsed_ms,
                    "Order placed"
                );
                cart.clear();
                self.details = OrderDetails::default();
                self.confirmation = Some(order.clone());
                self.transition(CheckoutState::Confirmed);
                Ok(SubmissionOutcome::Confirmed(order))
            }
            Err(e) => {
                tracing::warn!(error = %e, code = ?e.code, elapsed_ms, "Order submission failed");
                self.transition(CheckoutState::OrderDetailsOpen);
                Ok(SubmissionOutcome::Rejected(e))
            }
        }
    }

    /// Close the confirmation screen
    pub fn dismiss_confirmation(&mut self) -> CheckoutResult<()> {
        self.ensure_state(CheckoutState::Confirmed, "dismiss confirmation")?;
        self.confirmation = None;
        self.transition(CheckoutState::Browsing);
        Ok(())
    }

    /// Run a whole submission against `backend`
    pub async fn submit(
        &mut self,
        cart: &mut CartLedger,
        backend: &dyn OrderBackend,
    ) -> CheckoutResult<SubmissionOutcome> {
        let payload = self.begin_submit(cart)?;
        let result = backend.submit_order(&payload).await;
        self.complete_submit(result, cart)
    }
}
