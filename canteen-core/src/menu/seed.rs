//! Built-in menu used when the backend has no entries or cannot be reached

use shared::models::{Category, MenuEntry};

const IMAGE_BASE: &str = "https://images.unsplash.com/";

fn entry(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: Category,
    photo: &str,
    available: bool,
) -> MenuEntry {
    MenuEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        image: format!("{IMAGE_BASE}{photo}?w=1080&q=80"),
        available,
    }
}

/// The canteen's default menu
pub fn seed_menu() -> Vec<MenuEntry> {
    use Category::*;

    vec![
        entry("1", "Classic Burger", "Juicy beef patty with fresh lettuce, tomato, and special sauce", 149.0, MainCourse, "photo-1688246780164-00c01647e78c", true),
        entry("2", "Margherita Pizza", "Fresh mozzarella, tomato sauce, and basil on thin crust", 299.0, MainCourse, "photo-1544982503-9f984c14501a", true),
        entry("3", "Creamy Pasta", "Penne pasta in rich creamy alfredo sauce with herbs", 249.0, MainCourse, "photo-1621996346565-e3dbc646d9a9", true),
        entry("4", "Garden Fresh Salad", "Mixed greens, cherry tomatoes, cucumber with vinaigrette", 129.0, Salads, "photo-1624340209404-4f479dd59708", true),
        entry("5", "Club Sandwich", "Triple-decker with chicken, bacon, lettuce, and mayo", 199.0, MainCourse, "photo-1763647814142-b1eb054d42f1", false),
        entry("6", "Cappuccino", "Rich espresso with steamed milk and foam", 99.0, Beverages, "photo-1592663527359-cf6642f54cff", true),
        entry("7", "Fresh Lemonade", "Homemade lemonade with fresh mint", 79.0, Beverages, "photo-1716925539259-ce0115263d37", true),
        entry("8", "Chocolate Cake", "Decadent chocolate layer cake with ganache", 159.0, Desserts, "photo-1679942262057-d5732f732841", true),
        entry("9", "Chicken Biryani", "Aromatic basmati rice cooked with tender chicken and traditional spices", 249.0, MainCourse, "photo-1735233024815-7986206a18a9", true),
        entry("10", "Vegetable Fried Rice", "Wok-tossed rice with fresh colorful vegetables and soy sauce", 189.0, MainCourse, "photo-1581184953987-5668072c8420", true),
        entry("11", "Paneer Tikka Masala", "Grilled cottage cheese cubes in spicy and creamy tomato gravy", 229.0, MainCourse, "photo-1567188040759-fb8a883dc6d8", true),
        entry("12", "Caesar Salad", "Crisp romaine lettuce with parmesan, croutons and caesar dressing", 179.0, Salads, "photo-1550304943-4f24f54ddde9", true),
        entry("13", "Fruit Salad", "Seasonal fresh fruits bowl with honey drizzle", 149.0, Salads, "photo-1609090802574-612df35aaa04", true),
        entry("14", "Mango Lassi", "Refreshing yogurt-based drink with sweet mango pulp", 119.0, Beverages, "photo-1655074084308-901ea6b88fd3", true),
        entry("15", "Masala Chai", "Traditional spiced tea brewed with milk and aromatic spices", 49.0, Beverages, "photo-1628702774354-f09e4a167a8e", true),
        entry("16", "Gulab Jamun", "Soft milk solids balls soaked in rose-flavored sugar syrup (2 pcs)", 89.0, Desserts, "photo-1666190092159-3171cf0fbb12", true),
        entry("17", "Brownie with Ice Cream", "Warm chocolate walnut brownie served with vanilla ice cream", 169.0, Desserts, "photo-1639744093270-36e0cc2817ee", true),
    ]
}
