//! Restaurant partner dashboard
//!
//! Menu management for partners. Every mutation goes to the backend first;
//! the entry it returns replaces the local copy by id.

use crate::backend::MenuAdmin;
use crate::menu::{CatalogStats, CategoryFilter, MenuCatalog, MenuFilter, MenuView};
use crate::money::is_valid_price;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Category, MenuEntry, MenuEntryCreate, MenuEntryUpdate};
use thiserror::Error;

/// Image used when a new entry is created without one
pub const DEFAULT_IMAGE: &str = "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=400";

/// Menu form errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Please fill in all required fields")]
    MissingRequired,

    #[error("Invalid price: {0}")]
    InvalidPrice(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::MissingRequired => {
                AppError::with_message(ErrorCode::RequiredField, err.to_string())
            }
            CatalogError::InvalidPrice(raw) => {
                AppError::with_message(ErrorCode::MenuItemInvalidPrice, err.to_string())
                    .with_detail("price", raw.as_str())
            }
        }
    }
}

/// Add/edit form contents. Price is kept as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: Category,
    pub image: String,
    pub available: bool,
}

impl Default for MenuForm {
    fn default() -> Self {
        Self::blank()
    }
}

impl MenuForm {
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: Category::MainCourse,
            image: String::new(),
            available: true,
        }
    }

    /// Pre-filled for editing `entry`
    pub fn from_entry(entry: &MenuEntry) -> Self {
        Self {
            name: entry.name.clone(),
            description: entry.description.clone(),
            price: entry.price.to_string(),
            category: entry.category,
            image: entry.image.clone(),
            available: entry.available,
        }
    }

    /// Check required fields and parse the price
    pub fn validate(&self) -> Result<f64, CatalogError> {
        let raw = self.price.trim();
        if self.name.trim().is_empty() || raw.is_empty() {
            return Err(CatalogError::MissingRequired);
        }
        match raw.parse::<f64>() {
            Ok(price) if is_valid_price(price) => Ok(price),
            _ => Err(CatalogError::InvalidPrice(raw.to_string())),
        }
    }

    pub fn to_create(&self) -> Result<MenuEntryCreate, CatalogError> {
        let price = self.validate()?;
        let image = if self.image.trim().is_empty() {
            DEFAULT_IMAGE.to_string()
        } else {
            self.image.trim().to_string()
        };
        Ok(MenuEntryCreate {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            price,
            category: self.category,
            image,
            available: self.available,
        })
    }

    pub fn to_update(&self) -> Result<MenuEntryUpdate, CatalogError> {
        let price = self.validate()?;
        Ok(MenuEntryUpdate {
            name: Some(self.name.trim().to_string()),
            description: Some(self.description.clone()),
            price: Some(price),
            category: Some(self.category),
            image: Some(self.image.trim().to_string()),
            available: Some(self.available),
        })
    }
}

/// Partner view state: its own filter over the shared catalog
#[derive(Debug, Clone, Default)]
pub struct PartnerDashboard {
    filter: MenuFilter,
}

impl PartnerDashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.set_category(category);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    pub fn visible<'a>(&self, catalog: &'a MenuCatalog) -> MenuView<'a> {
        catalog.view(&self.filter)
    }

    pub fn stats(&self, catalog: &MenuCatalog) -> CatalogStats {
        catalog.stats()
    }

    pub async fn add_item(
        &self,
        catalog: &mut MenuCatalog,
        admin: &dyn MenuAdmin,
        form: &MenuForm,
    ) -> AppResult<MenuEntry> {
        let create = form.to_create()?;
        let created = admin.create_entry(&create).await?;
        tracing::info!(item_id = %created.id, name = %created.name, "Menu item added");
        catalog.upsert(created.clone());
        Ok(created)
    }

    pub async fn update_item(
        &self,
        catalog: &mut MenuCatalog,
        admin: &dyn MenuAdmin,
        id: &str,
        form: &MenuForm,
    ) -> AppResult<MenuEntry> {
        ensure_exists(catalog, id)?;
        let update = form.to_update()?;
        let updated = admin.update_entry(id, &update).await?;
        tracing::info!(item_id = %id, "Menu item updated");
        catalog.upsert(updated.clone());
        Ok(updated)
    }

    pub async fn delete_item(
        &self,
        catalog: &mut MenuCatalog,
        admin: &dyn MenuAdmin,
        id: &str,
    ) -> AppResult<()> {
        ensure_exists(catalog, id)?;
        admin.delete_entry(id).await?;
        catalog.remove(id);
        tracing::info!(item_id = %id, "Menu item deleted");
        Ok(())
    }

    /// Flip availability. Returns the new flag.
    pub async fn toggle_availability(
        &self,
        catalog: &mut MenuCatalog,
        admin: &dyn MenuAdmin,
        id: &str,
    ) -> AppResult<bool> {
        let current = ensure_exists(catalog, id)?.available;
        let updated = admin
            .update_entry(id, &MenuEntryUpdate::availability(!current))
            .await?;
        let available = updated.available;
        tracing::info!(item_id = %id, available, "Menu item availability changed");
        catalog.upsert(updated);
        Ok(available)
    }
}

fn ensure_exists<'a>(catalog: &'a MenuCatalog, id: &str) -> AppResult<&'a MenuEntry> {
    catalog
        .get(id)
        .ok_or_else(|| AppError::new(ErrorCode::MenuItemNotFound).with_detail("item_id", id))
}
