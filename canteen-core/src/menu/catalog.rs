//! Menu catalog: the session's read-only copy of the menu
//!
//! Loaded once per authenticated session. Partner edits replace whole entries
//! by id; the cart never writes back here.

use super::filter::MenuFilter;
use super::seed::seed_menu;
use crate::backend::MenuSource;
use crate::money::is_valid_price;
use serde::{Deserialize, Serialize};
use shared::error::AppResult;
use shared::models::MenuEntry;

/// Where the currently loaded entries came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogOrigin {
    Backend,
    /// Built-in menu, used when the backend is empty or unreachable
    Seed,
}

/// What the menu grid should render
#[derive(Debug, PartialEq)]
pub enum MenuView<'a> {
    /// Nothing fetched yet
    Loading,
    /// Loaded, but nothing matches the current filter
    Empty,
    Items(Vec<&'a MenuEntry>),
}

impl<'a> MenuView<'a> {
    pub fn items(&self) -> &[&'a MenuEntry] {
        match self {
            MenuView::Items(items) => items,
            _ => &[],
        }
    }
}

/// Availability counters shown on the partner dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total: usize,
    pub available: usize,
    pub unavailable: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    entries: Vec<MenuEntry>,
    origin: Option<CatalogOrigin>,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog already loaded with `entries`
    pub fn with_entries(entries: Vec<MenuEntry>) -> Self {
        let mut catalog = Self::new();
        catalog.replace_all(entries, CatalogOrigin::Backend);
        catalog
    }

    pub fn is_loaded(&self) -> bool {
        self.origin.is_some()
    }

    pub fn origin(&self) -> Option<CatalogOrigin> {
        self.origin
    }

    /// Install `entries`, dropping any whose price is negative, non-finite or
    /// above [`MAX_PRICE`](crate::money::MAX_PRICE)
    pub fn replace_all(&mut self, entries: Vec<MenuEntry>, origin: CatalogOrigin) {
        self.entries = valid_entries(entries);
        self.origin = Some(origin);
    }

    /// Install a fetch result, falling back to the seed menu when the backend
    /// answered with nothing or failed.
    pub fn load(&mut self, fetched: AppResult<Vec<MenuEntry>>) -> CatalogOrigin {
        match fetched.map(valid_entries) {
            Ok(entries) if !entries.is_empty() => {
                tracing::info!(count = entries.len(), "Menu loaded from backend");
                self.replace_all(entries, CatalogOrigin::Backend);
                CatalogOrigin::Backend
            }
            Ok(_) => {
                tracing::info!("Backend menu is empty, using built-in menu");
                self.replace_all(seed_menu(), CatalogOrigin::Seed);
                CatalogOrigin::Seed
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch menu, using built-in menu");
                self.replace_all(seed_menu(), CatalogOrigin::Seed);
                CatalogOrigin::Seed
            }
        }
    }

    /// Fetch from the menu source and install the result
    pub async fn refresh(&mut self, source: &dyn MenuSource) -> CatalogOrigin {
        let fetched = source.fetch_menu().await;
        self.load(fetched)
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the entry with the same id in place, or append it.
    ///
    /// Returns false, leaving the catalog untouched, when the price is invalid.
    pub fn upsert(&mut self, entry: MenuEntry) -> bool {
        if !accepts(&entry) {
            return false;
        }
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<MenuEntry> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos))
    }

    /// Returns false when no entry has this id
    pub fn set_available(&mut self, id: &str, available: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.available = available;
                true
            }
            None => false,
        }
    }

    pub fn available_count(&self) -> usize {
        self.entries.iter().filter(|e| e.available).count()
    }

    pub fn unavailable_count(&self) -> usize {
        self.entries.len() - self.available_count()
    }

    pub fn stats(&self) -> CatalogStats {
        let available = self.available_count();
        CatalogStats {
            total: self.entries.len(),
            available,
            unavailable: self.entries.len() - available,
        }
    }

    pub fn view(&self, filter: &MenuFilter) -> MenuView<'_> {
        if !self.is_loaded() {
            return MenuView::Loading;
        }
        let items = filter.apply(&self.entries);
        if items.is_empty() {
            MenuView::Empty
        } else {
            MenuView::Items(items)
        }
    }
}

fn accepts(entry: &MenuEntry) -> bool {
    let ok = is_valid_price(entry.price);
    if !ok {
        tracing::warn!(id = %entry.id, name = %entry.name, price = entry.price, "Dropping menu entry with invalid price");
    }
    ok
}

fn valid_entries(mut entries: Vec<MenuEntry>) -> Vec<MenuEntry> {
    entries.retain(accepts);
    entries
}
