//! Menu filter: category chip + free-text search

use shared::models::{Category, MenuEntry, UnknownCategory};
use std::fmt;
use std::str::FromStr;

/// Label of the catch-all category chip
pub const ALL_CATEGORIES: &str = "All";

/// Category selection of the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Chips in display order, "All" first
    pub fn chips() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Current filter selection
///
/// An entry passes when its category is admitted AND the query is empty or a
/// case-insensitive substring of the entry's name or description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    category: CategoryFilter,
    query: String,
    /// Lowercased copy of `query`, kept in sync by the setters
    needle: String,
}

impl MenuFilter {
    pub fn new(category: CategoryFilter, query: impl Into<String>) -> Self {
        let mut filter = Self {
            category,
            ..Default::default()
        };
        filter.set_query(query);
        filter
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.needle = self.query.to_lowercase();
    }

    pub fn matches(&self, entry: &MenuEntry) -> bool {
        self.category.admits(entry.category)
            && (self.needle.is_empty()
                || entry.name.to_lowercase().contains(&self.needle)
                || entry.description.to_lowercase().contains(&self.needle))
    }

    /// Stable filter: keeps input order, never sorts
    pub fn apply<'a, I>(&self, entries: I) -> Vec<&'a MenuEntry>
    where
        I: IntoIterator<Item = &'a MenuEntry>,
    {
        entries.into_iter().filter(|e| self.matches(e)).collect()
    }
}

/// One-shot form of [`MenuFilter::apply`]
pub fn filter<'a>(entries: &'a [MenuEntry], category: CategoryFilter, query: &str) -> Vec<&'a MenuEntry> {
    MenuFilter::new(category, query).apply(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, description: &str, category: Category) -> MenuEntry {
        MenuEntry {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price: 100.0,
            category,
            image: String::new(),
            available: true,
        }
    }

    fn sample() -> Vec<MenuEntry> {
        vec![
            entry("1", "Burger", "Juicy beef patty", Category::MainCourse),
            entry("4", "Garden Fresh Salad", "Mixed greens", Category::Salads),
            entry("6", "Cappuccino", "Rich espresso with steamed milk", Category::Beverages),
            entry("14", "Mango Lassi", "Yogurt drink with mango", Category::Beverages),
        ]
    }

    fn ids(entries: &[&MenuEntry]) -> Vec<String> {
        entries.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_all_with_query_matches_name_case_insensitively() {
        let entries = vec![
            entry("1", "Burger", "", Category::MainCourse),
            entry("6", "Cappuccino", "", Category::Beverages),
        ];
        let result = filter(&entries, CategoryFilter::All, "cap");
        assert_eq!(ids(&result), vec!["6"]);
    }

    #[test]
    fn test_query_matches_description() {
        let entries = sample();
        let result = filter(&entries, CategoryFilter::All, "ESPRESSO");
        assert_eq!(ids(&result), vec!["6"]);
    }

    #[test]
    fn test_category_only() {
        let entries = sample();
        let result = filter(&entries, CategoryFilter::Only(Category::Beverages), "");
        assert_eq!(ids(&result), vec!["6", "14"]);
    }

    #[test]
    fn test_category_and_query_both_required() {
        let entries = sample();
        let result = filter(&entries, CategoryFilter::Only(Category::Salads), "mango");
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_query_all_keeps_input_order() {
        let entries = sample();
        let result = filter(&entries, CategoryFilter::All, "");
        assert_eq!(ids(&result), vec!["1", "4", "6", "14"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let entries = sample();
        let f = MenuFilter::new(CategoryFilter::Only(Category::Beverages), "m");
        let once = f.apply(&entries);
        let twice = f.apply(once.iter().copied());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Main Course".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::MainCourse))
        );
        assert!("Snacks".parse::<CategoryFilter>().is_err());
        assert_eq!(CategoryFilter::Only(Category::Salads).to_string(), "Salads");
    }

    #[test]
    fn test_chips_start_with_all() {
        let chips: Vec<String> = CategoryFilter::chips().map(|c| c.to_string()).collect();
        assert_eq!(
            chips,
            vec!["All", "Main Course", "Salads", "Beverages", "Desserts"]
        );
    }
}
