//! Board view: the in-store display.

use chrono::{DateTime, Utc};
use common::ItemId;
use domain::{Menu, MenuItem, Price};
use manifest_store::Version;
use serde::Serialize;

use crate::projection::MenuProjection;

/// Default number of featured items on a board.
pub const DEFAULT_FEATURED_COUNT: usize = 4;

/// An item as shown on a board.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardItem {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub sold_out_until: Option<DateTime<Utc>>,
}

impl BoardItem {
    fn from_item(item: &MenuItem, now: DateTime<Utc>) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            sold_out_until: item.sold_out_until.filter(|_| item.is_sold_out_at(now)),
        }
    }
}

/// What a board renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub version: Version,
    pub featured: Vec<BoardItem>,
    pub sold_out: Vec<BoardItem>,
}

impl BoardSummary {
    /// Footer line, e.g. "Manifest v4 · 2 item(s) sold out".
    pub fn footer(&self) -> String {
        if self.sold_out.is_empty() {
            format!("Manifest v{} · All items available", self.version)
        } else {
            format!(
                "Manifest v{} · {} item(s) sold out",
                self.version,
                self.sold_out.len()
            )
        }
    }
}

/// First N visible items as "featured", plus every item sold out right now.
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    featured_count: usize,
}

impl BoardView {
    pub fn new(featured_count: usize) -> Self {
        Self { featured_count }
    }

    pub fn featured_count(&self) -> usize {
        self.featured_count
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new(DEFAULT_FEATURED_COUNT)
    }
}

impl MenuProjection for BoardView {
    type View = BoardSummary;

    fn name(&self) -> &'static str {
        "BoardView"
    }

    fn project(&self, menu: &Menu, now: DateTime<Utc>) -> BoardSummary {
        let featured = menu
            .items
            .iter()
            .filter(|item| item.visible)
            .take(self.featured_count)
            .map(|item| BoardItem::from_item(item, now))
            .collect();

        let sold_out = menu
            .items
            .iter()
            .filter(|item| item.is_sold_out_at(now))
            .map(|item| BoardItem::from_item(item, now))
            .collect();

        BoardSummary {
            version: menu.version,
            featured,
            sold_out,
        }
    }
}
