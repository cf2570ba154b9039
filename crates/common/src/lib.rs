//! Shared identifier types used across the MenuFlow crates.

pub mod types;

pub use types::{CategoryId, ItemId, MenuId, StoreId};
