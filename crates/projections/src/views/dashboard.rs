//! Dashboard view: operator counters.

use chrono::{DateTime, Utc};
use domain::Menu;
use manifest_store::Version;
use serde::Serialize;

use crate::projection::MenuProjection;

/// Counters shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub version: Version,
    pub item_count: usize,
    pub category_count: usize,
    pub sold_out_count: usize,
    pub hidden_count: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardView;

impl MenuProjection for DashboardView {
    type View = DashboardSummary;

    fn name(&self) -> &'static str {
        "DashboardView"
    }

    fn project(&self, menu: &Menu, now: DateTime<Utc>) -> DashboardSummary {
        DashboardSummary {
            version: menu.version,
            item_count: menu.items.len(),
            category_count: menu.categories.len(),
            sold_out_count: menu.items.iter().filter(|i| i.is_sold_out_at(now)).count(),
            hidden_count: menu.items.iter().filter(|i| !i.visible).count(),
        }
    }
}
