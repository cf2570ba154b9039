//! Domain layer for the MenuFlow manifest.
//!
//! This crate provides:
//! - The Menu aggregate (categories, items, version) and its value objects
//! - Schema validation applied identically on load and on mutation
//! - Mutation commands and the [`MenuService`] that read-modify-writes the
//!   manifest through a [`manifest_store::ManifestStore`]

pub mod error;
pub mod menu;

pub use error::{MenuError, Result, ValidationError};
pub use menu::{
    Calories, Category, ItemChanges, Menu, MenuItem, MenuService, Price, PublishedManifest,
    SetAvailability, UpdateItem, sample_menu,
};
