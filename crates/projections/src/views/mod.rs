//! Menu views.

mod board;
mod dashboard;
mod guest_menu;

pub use board::{BoardItem, BoardSummary, BoardView, DEFAULT_FEATURED_COUNT};
pub use dashboard::{DashboardSummary, DashboardView};
pub use guest_menu::{GuestItem, GuestMenu, GuestMenuView, GuestSection};
