//! The Menu aggregate and its entities.

use chrono::{DateTime, Utc};
use common::{CategoryId, ItemId, MenuId, StoreId};
use manifest_store::Version;
use serde::{Deserialize, Serialize};

use super::value_objects::{Calories, Price};
use crate::error::ValidationError;

fn default_visible() -> bool {
    true
}

/// A display group of menu items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub store_id: StoreId,
    pub name: String,
    /// Display position. Not unique; ties keep document order.
    pub order: i64,
    /// Informational daypart tags. Never evaluated by the store.
    #[serde(default)]
    pub daypart_rules: Vec<String>,
}

/// A single offering on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: ItemId,
    pub store_id: StoreId,
    pub category_id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<Calories>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Null or a past instant means available; a future instant means
    /// unavailable until then.
    #[serde(default)]
    pub sold_out_until: Option<DateTime<Utc>>,
}

impl MenuItem {
    /// Returns true if the item is sold out at `now`.
    pub fn is_sold_out_at(&self, now: DateTime<Utc>) -> bool {
        self.sold_out_until.is_some_and(|until| until > now)
    }

    /// Returns true if the item can be ordered at `now`.
    pub fn is_available_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_sold_out_at(now)
    }
}

/// The aggregate root: one store's complete menu.
///
/// A `Menu` is a value. Reads hand out a fresh copy and mutations build a new
/// `Menu` with the next version, which is persisted only after validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: MenuId,
    pub store_id: StoreId,
    pub version: Version,
    pub categories: Vec<Category>,
    pub items: Vec<MenuItem>,
}

impl Menu {
    /// Looks up an item by ID.
    pub fn item(&self, item_id: &ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| &item.id == item_id)
    }

    /// Looks up a category by ID.
    pub fn category(&self, category_id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == category_id)
    }

    /// Returns categories sorted by `order`, ties in document order.
    pub fn categories_in_order(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.categories.iter().collect();
        categories.sort_by_key(|c| c.order);
        categories
    }

    /// Returns the items belonging to a category, in document order.
    pub fn items_in_category<'a>(
        &'a self,
        category_id: &'a CategoryId,
    ) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.items
            .iter()
            .filter(move |item| &item.category_id == category_id)
    }

    /// Returns a copy of this menu with `item` replacing the item of the same
    /// ID and the version advanced by one.
    pub(crate) fn with_item(&self, item: MenuItem) -> Result<Menu, ValidationError> {
        let mut next = self.clone();
        if let Some(slot) = next.items.iter_mut().find(|i| i.id == item.id) {
            *slot = item;
        }
        next.version = self.next_version()?;
        Ok(next)
    }

    /// Returns the version the next write of this menu carries.
    pub(crate) fn next_version(&self) -> Result<Version, ValidationError> {
        self.version.next().ok_or_else(|| {
            ValidationError::new("version", format!("cannot advance past {}", self.version))
        })
    }
}
