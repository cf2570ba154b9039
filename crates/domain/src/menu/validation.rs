//! Schema validation for the manifest.
//!
//! Field-level constraints (non-negative price and calories, timestamp
//! format, defaults) are enforced by the types during deserialization. The
//! checks here cover what types cannot express. Both run on every load and
//! before every write.

use std::collections::HashSet;

use manifest_store::Version;
use serde_json::Value;

use super::model::{Menu, MenuItem};
use crate::error::{MenuError, Result, ValidationError};

pub(crate) fn validate_name(name: &str) -> std::result::Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name", "must not be empty"));
    }
    Ok(())
}

fn validate_item(item: &MenuItem) -> std::result::Result<(), ValidationError> {
    validate_name(&item.name)
        .map_err(|e| ValidationError::new(format!("items[{}].name", item.id), e.reason))
}

impl Menu {
    /// Checks the invariants that span fields: version in range, unique
    /// category and item IDs, non-empty item names, and that every item
    /// references a category of this menu.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.version < Version::first() {
            return Err(ValidationError::new("version", "must be at least 1"));
        }
        if self.version.as_u64() > Version::MAX {
            return Err(ValidationError::new(
                "version",
                format!("must not exceed {}", Version::MAX),
            ));
        }

        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(&category.id) {
                return Err(ValidationError::new(
                    "categories.id",
                    format!("duplicate category {}", category.id),
                ));
            }
        }

        let mut item_ids = HashSet::new();
        for item in &self.items {
            if !item_ids.insert(&item.id) {
                return Err(ValidationError::new(
                    "items.id",
                    format!("duplicate item {}", item.id),
                ));
            }
            if !category_ids.contains(&item.category_id) {
                return Err(ValidationError::new(
                    format!("items[{}].categoryId", item.id),
                    format!("unknown category {}", item.category_id),
                ));
            }
            validate_item(item)?;
        }

        Ok(())
    }

    /// Parses and validates a persisted manifest document.
    ///
    /// Any schema violation is reported as `CorruptState`; nothing is repaired.
    pub fn from_document(document: Value) -> Result<Menu> {
        let menu: Menu = serde_json::from_value(document)
            .map_err(|e| MenuError::CorruptState(e.to_string()))?;
        menu.validate()
            .map_err(|e| MenuError::CorruptState(e.to_string()))?;
        Ok(menu)
    }

    /// Serializes the menu for persistence.
    pub fn to_document(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| MenuError::CorruptState(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::sample_menu;
    use common::{CategoryId, ItemId};

    fn corrupt(document: Value) -> String {
        match Menu::from_document(document) {
            Err(MenuError::CorruptState(msg)) => msg,
            other => panic!("expected CorruptState, got {other:?}"),
        }
    }

    #[test]
    fn sample_document_round_trips() {
        let menu = sample_menu();
        let parsed = Menu::from_document(menu.to_document().unwrap()).unwrap();
        assert_eq!(parsed, menu);
    }

    #[test]
    fn dangling_category_reference_is_rejected() {
        let mut menu = sample_menu();
        menu.items[0].category_id = CategoryId::new("brunch");
        let err = menu.validate().unwrap_err();
        assert_eq!(err.field, "items[latte].categoryId");
    }

    #[test]
    fn duplicate_item_ids_are_rejected() {
        let mut menu = sample_menu();
        menu.items[1].id = ItemId::new("latte");
        assert_eq!(menu.validate().unwrap_err().field, "items.id");
    }

    #[test]
    fn duplicate_category_ids_are_rejected() {
        let mut menu = sample_menu();
        menu.categories[1].id = menu.categories[0].id.clone();
        assert_eq!(menu.validate().unwrap_err().field, "categories.id");
    }

    #[test]
    fn blank_item_name_is_rejected() {
        let mut menu = sample_menu();
        menu.items[2].name = "  ".to_string();
        assert!(menu.validate().is_err());
    }

    #[test]
    fn negative_price_in_document_is_corrupt() {
        let mut document = sample_menu().to_document().unwrap();
        document["items"][0]["price"] = serde_json::json!(-2.5);
        let msg = corrupt(document);
        assert!(msg.contains("price"), "{msg}");
    }

    #[test]
    fn missing_required_field_is_corrupt() {
        let mut document = sample_menu().to_document().unwrap();
        document.as_object_mut().unwrap().remove("storeId");
        corrupt(document);
    }

    #[test]
    fn wrong_type_is_corrupt() {
        let mut document = sample_menu().to_document().unwrap();
        document["items"][0]["visible"] = serde_json::json!("yes");
        corrupt(document);
    }

    #[test]
    fn malformed_timestamp_is_corrupt() {
        let mut document = sample_menu().to_document().unwrap();
        document["items"][0]["soldOutUntil"] = serde_json::json!("tomorrow at five");
        corrupt(document);
    }

    #[test]
    fn version_zero_is_corrupt() {
        let mut document = sample_menu().to_document().unwrap();
        document["version"] = serde_json::json!(0);
        corrupt(document);
    }

    #[test]
    fn version_beyond_max_is_corrupt() {
        let mut document = sample_menu().to_document().unwrap();
        document["version"] = serde_json::json!(u64::MAX);
        let msg = corrupt(document);
        assert!(msg.contains("version"), "{msg}");
    }

    #[test]
    fn fractional_category_order_is_corrupt() {
        let mut document = sample_menu().to_document().unwrap();
        document["categories"][0]["order"] = serde_json::json!(1.5);
        corrupt(document);
    }
}
