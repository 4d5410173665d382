//! Menu Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Menu category (closed set shown as filter chips)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Main Course")]
    MainCourse,
    Salads,
    Beverages,
    Desserts,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 4] = [
        Category::MainCourse,
        Category::Salads,
        Category::Beverages,
        Category::Desserts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MainCourse => "Main Course",
            Category::Salads => "Salads",
            Category::Beverages => "Beverages",
            Category::Desserts => "Desserts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category label is not one of [`Category::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Menu entry (one orderable catalog item)
///
/// Created by the backend; the front-end core treats it as immutable input and
/// only ever replaces whole entries by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Backend document id (`_id` on the wire)
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unit price, currency-agnostic
    pub price: f64,
    pub category: Category,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

/// Create menu entry payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntryCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub image: String,
    pub available: bool,
}

/// Update menu entry payload (partial)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl MenuEntryUpdate {
    /// Update that only flips availability
    pub fn availability(available: bool) -> Self {
        Self {
            available: Some(available),
            ..Default::default()
        }
    }

    /// Apply the present fields onto an entry
    pub fn apply_to(&self, entry: &mut MenuEntry) {
        if let Some(name) = &self.name {
            entry.name = name.clone();
        }
        if let Some(description) = &self.description {
            entry.description = description.clone();
        }
        if let Some(price) = self.price {
            entry.price = price;
        }
        if let Some(category) = self.category {
            entry.category = category;
        }
        if let Some(image) = &self.image {
            entry.image = image.clone();
        }
        if let Some(available) = self.available {
            entry.available = available;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&Category::MainCourse).unwrap(),
            "\"Main Course\""
        );
        let c: Category = serde_json::from_str("\"Beverages\"").unwrap();
        assert_eq!(c, Category::Beverages);
        assert!(serde_json::from_str::<Category>("\"Snacks\"").is_err());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Desserts".parse::<Category>(), Ok(Category::Desserts));
        assert_eq!(
            "All".parse::<Category>(),
            Err(UnknownCategory("All".to_string()))
        );
    }

    #[test]
    fn test_menu_entry_accepts_backend_id() {
        let json = r#"{
            "_id": "65f0c",
            "name": "Cappuccino",
            "description": "Rich espresso with steamed milk and foam",
            "price": 99,
            "category": "Beverages",
            "image": "cup.jpg",
            "available": true,
            "__v": 0
        }"#;
        let entry: MenuEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "65f0c");
        assert_eq!(entry.price, 99.0);
        assert_eq!(entry.category, Category::Beverages);
    }

    #[test]
    fn test_update_applies_only_present_fields() {
        let mut entry = MenuEntry {
            id: "1".to_string(),
            name: "Burger".to_string(),
            description: "Beef".to_string(),
            price: 149.0,
            category: Category::MainCourse,
            image: String::new(),
            available: true,
        };
        MenuEntryUpdate::availability(false).apply_to(&mut entry);
        assert!(!entry.available);
        assert_eq!(entry.name, "Burger");

        let json = serde_json::to_string(&MenuEntryUpdate::availability(true)).unwrap();
        assert_eq!(json, r#"{"available":true}"#);
    }
}
