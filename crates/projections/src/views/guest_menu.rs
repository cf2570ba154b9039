//! Guest menu view: what diners see.

use chrono::{DateTime, Utc};
use common::{CategoryId, ItemId};
use domain::{Calories, Menu, MenuItem, Price};
use manifest_store::Version;
use serde::Serialize;

use crate::projection::MenuProjection;

/// A visible item as shown to guests.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestItem {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub calories: Option<Calories>,
    pub allergens: Vec<String>,
    pub sold_out: bool,
    pub sold_out_until: Option<DateTime<Utc>>,
}

impl GuestItem {
    fn from_item(item: &MenuItem, now: DateTime<Utc>) -> Self {
        let sold_out = item.is_sold_out_at(now);
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            calories: item.calories,
            allergens: item.allergens.clone(),
            sold_out,
            sold_out_until: item.sold_out_until.filter(|_| sold_out),
        }
    }
}

/// One category section of the guest menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestSection {
    pub category_id: CategoryId,
    pub name: String,
    pub items: Vec<GuestItem>,
}

/// The full guest menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestMenu {
    pub version: Version,
    pub sections: Vec<GuestSection>,
}

/// Visible items grouped by category, categories in display order.
///
/// Hidden items are left out. Sold-out items stay listed and are flagged.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuestMenuView;

impl MenuProjection for GuestMenuView {
    type View = GuestMenu;

    fn name(&self) -> &'static str {
        "GuestMenuView"
    }

    fn project(&self, menu: &Menu, now: DateTime<Utc>) -> GuestMenu {
        let sections = menu
            .categories_in_order()
            .into_iter()
            .map(|category| GuestSection {
                category_id: category.id.clone(),
                name: category.name.clone(),
                items: menu
                    .items_in_category(&category.id)
                    .filter(|item| item.visible)
                    .map(|item| GuestItem::from_item(item, now))
                    .collect(),
            })
            .collect();

        GuestMenu {
            version: menu.version,
            sections,
        }
    }
}
