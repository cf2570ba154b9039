//! Read views over the menu manifest.
//!
//! Every view is a pure projection of a [`domain::Menu`] at a given instant:
//! - [`GuestMenuView`]: visible items grouped by category
//! - [`BoardView`]: featured items and currently sold-out items
//! - [`DashboardView`]: sold-out and hidden counts plus the version
//!
//! [`ViewReader`] reads the current manifest through the menu service and
//! applies a projection. Views have no write access.

pub mod projection;
pub mod reader;
pub mod views;

pub use projection::MenuProjection;
pub use reader::ViewReader;
pub use views::{
    BoardItem, BoardSummary, BoardView, DashboardSummary, DashboardView, GuestItem, GuestMenu,
    GuestMenuView, GuestSection,
};
