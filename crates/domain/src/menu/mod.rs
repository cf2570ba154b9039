//! Menu aggregate and related types.

mod commands;
mod model;
mod seed;
mod service;
mod validation;
mod value_objects;

pub use commands::{ItemChanges, SetAvailability, UpdateItem};
pub use model::{Category, Menu, MenuItem};
pub use seed::sample_menu;
pub use service::{MenuService, PublishedManifest};
pub use value_objects::{Calories, Price};
