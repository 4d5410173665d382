//! Storefront: the customer view's single owned state object
//!
//! Hosts keep one `Storefront` per authenticated session and route every
//! customer interaction through it.

use crate::backend::{MenuSource, OrderBackend};
use crate::cart::CartLedger;
use crate::checkout::{CheckoutFlow, CheckoutResult, CheckoutState, OrderDetails, SubmissionOutcome};
use crate::menu::{CatalogOrigin, CategoryFilter, MenuCatalog, MenuFilter, MenuView};
use shared::error::{AppError, AppResult, ErrorCode};

#[derive(Debug, Clone, Default)]
pub struct Storefront {
    catalog: MenuCatalog,
    filter: MenuFilter,
    cart: CartLedger,
    checkout: CheckoutFlow,
}

impl Storefront {
    pub fn new(catalog: MenuCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    // ========== Menu ==========

    pub async fn load_menu(&mut self, source: &dyn MenuSource) -> CatalogOrigin {
        self.catalog.refresh(source).await
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// Partner edits go through here
    pub fn catalog_mut(&mut self) -> &mut MenuCatalog {
        &mut self.catalog
    }

    pub fn filter(&self) -> &MenuFilter {
        &self.filter
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.set_category(category);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    /// Entries to render for the current filter
    pub fn visible(&self) -> MenuView<'_> {
        self.catalog.view(&self.filter)
    }

    // ========== Cart ==========

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// Add one unit of a catalog entry. Unavailable entries are refused.
    pub fn add_to_cart(&mut self, item_id: &str) -> AppResult<u32> {
        let entry = self.catalog.get(item_id).ok_or_else(|| {
            AppError::new(ErrorCode::MenuItemNotFound).with_detail("item_id", item_id)
        })?;
        if !entry.available {
            return Err(AppError::with_message(
                ErrorCode::MenuItemUnavailable,
                format!("{} is currently unavailable", entry.name),
            )
            .with_detail("item_id", item_id));
        }
        Ok(self.cart.add(entry))
    }

    /// Remove one unit; no-op for items not in the cart
    pub fn remove_from_cart(&mut self, item_id: &str) -> u32 {
        let entry = self
            .cart
            .lines()
            .iter()
            .find(|l| l.item_id() == item_id)
            .map(|l| l.entry.clone());
        match entry {
            Some(entry) => self.cart.remove(&entry),
            None => 0,
        }
    }

    /// +/- buttons in the cart drawer
    pub fn update_quantity(&mut self, item_id: &str, delta: i64) -> u32 {
        self.cart.set_quantity(item_id, delta)
    }

    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.cart.quantity_of(item_id)
    }

    // ========== Checkout ==========

    pub fn checkout(&self) -> &CheckoutFlow {
        &self.checkout
    }

    pub fn checkout_state(&self) -> CheckoutState {
        self.checkout.state()
    }

    pub fn open_cart(&mut self) -> CheckoutResult<()> {
        self.checkout.open_cart()
    }

    pub fn close_cart(&mut self) -> CheckoutResult<()> {
        self.checkout.close_cart()
    }

    pub fn proceed_to_checkout(&mut self) -> CheckoutResult<()> {
        self.checkout.proceed_to_details(&self.cart)
    }

    pub fn cancel_order(&mut self) -> CheckoutResult<()> {
        self.checkout.cancel_details()
    }

    pub fn order_details_mut(&mut self) -> CheckoutResult<&mut OrderDetails> {
        self.checkout.details_mut()
    }

    /// Submit the order form against `backend`
    pub async fn place_order(&mut self, backend: &dyn OrderBackend) -> CheckoutResult<SubmissionOutcome> {
        self.checkout.submit(&mut self.cart, backend).await
    }

    pub fn dismiss_confirmation(&mut self) -> CheckoutResult<()> {
        self.checkout.dismiss_confirmation()
    }
}
