//! Menu mutation commands.

use chrono::{DateTime, Utc};
use common::ItemId;
use serde::Deserialize;

use super::model::MenuItem;
use super::validation::validate_name;
use super::value_objects::{Calories, Price};
use crate::error::ValidationError;

/// Command to set or clear an item's sold-out window ("86" an item).
#[derive(Debug, Clone)]
pub struct SetAvailability {
    /// The item to update.
    pub item_id: ItemId,

    /// Sold out until this instant. None makes the item available now.
    pub sold_out_until: Option<DateTime<Utc>>,
}

impl SetAvailability {
    /// Creates a new SetAvailability command.
    pub fn new(item_id: impl Into<ItemId>, sold_out_until: Option<DateTime<Utc>>) -> Self {
        Self {
            item_id: item_id.into(),
            sold_out_until,
        }
    }

    /// Marks the item sold out until `until`.
    pub fn sold_out_until(item_id: impl Into<ItemId>, until: DateTime<Utc>) -> Self {
        Self::new(item_id, Some(until))
    }

    /// Clears any sold-out window.
    pub fn clear(item_id: impl Into<ItemId>) -> Self {
        Self::new(item_id, None)
    }
}

/// Partial set of item fields. Fields left as None keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub visible: Option<bool>,
    pub calories: Option<f64>,
    pub allergens: Option<Vec<String>>,
}

impl ItemChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn calories(mut self, calories: f64) -> Self {
        self.calories = Some(calories);
        self
    }

    pub fn allergens<I, T>(mut self, allergens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.allergens = Some(allergens.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.visible.is_none()
            && self.calories.is_none()
            && self.allergens.is_none()
    }

    /// Returns a copy of `item` with the supplied fields applied.
    ///
    /// Every supplied field is validated before anything is applied, so a
    /// rejected change never yields a partially updated item.
    pub fn apply_to(&self, item: &MenuItem) -> Result<MenuItem, ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        let price = self.price.map(Price::new).transpose()?;
        let calories = self.calories.map(Calories::new).transpose()?;

        let mut next = item.clone();
        if let Some(name) = &self.name {
            next.name = name.clone();
        }
        if let Some(description) = &self.description {
            next.description = Some(description.clone());
        }
        if let Some(price) = price {
            next.price = price;
        }
        if let Some(visible) = self.visible {
            next.visible = visible;
        }
        if let Some(calories) = calories {
            next.calories = Some(calories);
        }
        if let Some(allergens) = &self.allergens {
            let mut tags: Vec<String> = Vec::with_capacity(allergens.len());
            for tag in allergens {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
            next.allergens = tags;
        }
        Ok(next)
    }
}

/// Command to update fields of a menu item.
#[derive(Debug, Clone)]
pub struct UpdateItem {
    /// The item to update.
    pub item_id: ItemId,

    /// The fields to change.
    pub changes: ItemChanges,
}

impl UpdateItem {
    /// Creates a new UpdateItem command.
    pub fn new(item_id: impl Into<ItemId>, changes: ItemChanges) -> Self {
        Self {
            item_id: item_id.into(),
            changes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::sample_menu;

    fn fries() -> MenuItem {
        sample_menu().item(&ItemId::new("fries")).unwrap().clone()
    }

    #[test]
    fn empty_changes_are_detected() {
        assert!(ItemChanges::new().is_empty());
        assert!(!ItemChanges::new().visible(false).is_empty());
    }

    #[test]
    fn single_field_change_leaves_others() {
        let before = fries();
        let after = ItemChanges::new().price(5.0).apply_to(&before).unwrap();
        assert_eq!(after.price.amount(), 5.0);
        assert_eq!(after.name, before.name);
        assert_eq!(after.description, before.description);
        assert_eq!(after.calories, before.calories);
        assert_eq!(after.allergens, before.allergens);
        assert_eq!(after.visible, before.visible);
        assert_eq!(after.sold_out_until, before.sold_out_until);
    }

    #[test]
    fn invalid_field_rejects_whole_change() {
        let before = fries();
        let changes = ItemChanges::new().name("Curly Fries").price(-1.0);
        let err = changes.apply_to(&before).unwrap_err();
        assert_eq!(err.field, "price");
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = ItemChanges::new().name("").apply_to(&fries()).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn negative_calories_are_rejected() {
        let err = ItemChanges::new()
            .calories(-5.0)
            .apply_to(&fries())
            .unwrap_err();
        assert_eq!(err.field, "calories");
    }

    #[test]
    fn allergens_are_deduplicated_in_order() {
        let after = ItemChanges::new()
            .allergens(["soy", "gluten", "soy"])
            .apply_to(&fries())
            .unwrap();
        assert_eq!(after.allergens, vec!["soy", "gluten"]);
    }

    #[test]
    fn changes_deserialize_from_camel_case_json() {
        let changes: ItemChanges =
            serde_json::from_str(r#"{ "price": 4.25, "visible": false }"#).unwrap();
        assert_eq!(changes, ItemChanges::new().price(4.25).visible(false));
    }

    #[test]
    fn unknown_change_fields_are_refused() {
        let result: Result<ItemChanges, _> = serde_json::from_str(r#"{ "soldOutUntil": null }"#);
        assert!(result.is_err());
    }
}
