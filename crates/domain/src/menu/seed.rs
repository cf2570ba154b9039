//! Default menu written when no manifest exists yet.

use common::{CategoryId, ItemId, MenuId, StoreId};
use manifest_store::Version;

use super::model::{Category, Menu, MenuItem};
use super::value_objects::{Calories, Price};

const STORE: &str = "demo-bistro";

fn category(id: &str, name: &str, order: i64, dayparts: &[&str]) -> Category {
    Category {
        id: CategoryId::new(id),
        store_id: StoreId::new(STORE),
        name: name.to_string(),
        order,
        daypart_rules: dayparts.iter().map(|d| d.to_string()).collect(),
    }
}

struct SeedItem<'a> {
    id: &'a str,
    category: &'a str,
    name: &'a str,
    description: Option<&'a str>,
    price: f64,
    calories: Option<f64>,
    allergens: &'a [&'a str],
    visible: bool,
}

impl SeedItem<'_> {
    /// Panics on an invalid price or calorie literal.
    fn build(self) -> MenuItem {
        MenuItem {
            id: ItemId::new(self.id),
            store_id: StoreId::new(STORE),
            category_id: CategoryId::new(self.category),
            name: self.name.to_string(),
            description: self.description.map(str::to_string),
            price: Price::new(self.price).expect("seed prices are non-negative"),
            calories: self
                .calories
                .map(|c| Calories::new(c).expect("seed calories are non-negative")),
            allergens: self.allergens.iter().map(|a| a.to_string()).collect(),
            visible: self.visible,
            sold_out_until: None,
        }
    }
}

/// Returns the Demo Bistro menu at version 1.
pub fn sample_menu() -> Menu {
    let items = vec![
        SeedItem {
            id: "latte",
            category: "espresso-bar",
            name: "Maple Oat Latte",
            description: Some("Double espresso, steamed oat milk and maple syrup."),
            price: 5.25,
            calories: Some(190.0),
            allergens: &["oat"],
            visible: true,
        },
        SeedItem {
            id: "espresso",
            category: "espresso-bar",
            name: "Espresso",
            description: Some("A double shot of the house blend."),
            price: 3.0,
            calories: None,
            allergens: &[],
            visible: true,
        },
        SeedItem {
            id: "cold-brew",
            category: "espresso-bar",
            name: "Cold Brew",
            description: Some("Steeped for eighteen hours, served over ice."),
            price: 4.5,
            calories: Some(5.0),
            allergens: &[],
            visible: true,
        },
        SeedItem {
            id: "croissant",
            category: "kitchen",
            name: "Butter Croissant",
            description: None,
            price: 3.75,
            calories: Some(260.0),
            allergens: &["gluten", "dairy"],
            visible: true,
        },
        SeedItem {
            id: "breakfast-sandwich",
            category: "kitchen",
            name: "Egg & Cheddar Sandwich",
            description: Some("Soft scrambled egg and aged cheddar on a brioche bun."),
            price: 7.5,
            calories: Some(430.0),
            allergens: &["egg", "dairy", "gluten"],
            visible: true,
        },
        SeedItem {
            id: "seasonal-soup",
            category: "kitchen",
            name: "Seasonal Soup",
            description: Some("Ask your server about today's soup."),
            price: 6.0,
            calories: None,
            allergens: &[],
            visible: false,
        },
        SeedItem {
            id: "fries",
            category: "sides",
            name: "Hand-Cut Fries",
            description: Some("Twice-fried russet potatoes with sea salt."),
            price: 3.99,
            calories: Some(365.0),
            allergens: &[],
            visible: true,
        },
    ];

    Menu {
        id: MenuId::new("menu-demo-bistro"),
        store_id: StoreId::new(STORE),
        version: Version::first(),
        categories: vec![
            category("espresso-bar", "Espresso Bar", 1, &["all-day"]),
            category("kitchen", "Kitchen", 2, &["breakfast", "lunch"]),
            category("sides", "Sides", 3, &["lunch", "dinner"]),
        ],
        items: items.into_iter().map(SeedItem::build).collect(),
    }
}
