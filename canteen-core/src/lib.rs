//! Campus Canteen front-end core
//!
//! UI-framework-agnostic state for the canteen ordering app:
//!
//! - **menu**: catalog, category/search filter, built-in fallback menu
//! - **cart**: Cart Ledger (quantities per menu entry, totals)
//! - **code_input**: six-slot verification code entry and resend cooldown
//! - **checkout**: Browsing → CartOpen → OrderDetailsOpen → Submitting → Confirmed
//! - **session**: login / verification / view selection
//! - **storefront**: customer view state
//! - **partner**: restaurant partner menu management
//! - **profile**: customer details and saved addresses
//! - **backend**: collaborator traits implemented by the HTTP client
//!
//! Operations return values or events; rendering is left to the host.

pub mod backend;
pub mod cart;
pub mod checkout;
pub mod code_input;
pub mod config;
pub mod menu;
pub mod money;
pub mod partner;
pub mod profile;
pub mod session;
pub mod storefront;
pub mod utils;

// Re-exports
pub use backend::{MenuAdmin, MenuSource, OrderBackend};
pub use cart::{CartLedger, CartLine};
pub use checkout::{CheckoutError, CheckoutFlow, CheckoutState, OrderDetails, SubmissionOutcome};
pub use code_input::{CODE_LENGTH, CodeEntry, CodeEvent, ResendCooldown, SegmentedCode};
pub use config::CoreConfig;
pub use menu::{CategoryFilter, MenuCatalog, MenuFilter, MenuView};
pub use partner::{CatalogError, MenuForm, PartnerDashboard};
pub use profile::{Profile, ProfileDetails, ProfileError, SavedAddresses};
pub use session::{AuthStep, Session, ViewMode};
pub use storefront::Storefront;
