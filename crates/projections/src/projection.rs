//! Core projection trait.

use chrono::{DateTime, Utc};
use domain::Menu;
use serde::Serialize;

/// A read-only projection of the menu.
///
/// Projections are pure: the same menu and instant always produce the same
/// view. Availability is evaluated against `now`, never the wall clock.
pub trait MenuProjection: Send + Sync {
    /// The projected view.
    type View: Serialize + Send;

    /// Returns the name of this projection.
    fn name(&self) -> &'static str;

    /// Projects `menu` as of `now`.
    fn project(&self, menu: &Menu, now: DateTime<Utc>) -> Self::View;
}
