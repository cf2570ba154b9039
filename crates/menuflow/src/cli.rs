//! Command line definition.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use domain::ItemChanges;

/// Operate the MenuFlow menu manifest.
#[derive(Debug, Parser)]
#[command(name = "menuflow", version, about)]
pub struct Cli {
    /// Manifest file; overrides MENU_DATA_PATH.
    #[arg(long, global = true)]
    pub data_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the published manifest.
    Show,

    /// Mark an item sold out until a time, or clear its sold-out window.
    #[command(name = "eighty-six", visible_alias = "86")]
    EightySix {
        /// Item to update.
        item: String,

        /// RFC 3339 instant the item is sold out until. Omit to clear.
        #[arg(long)]
        until: Option<DateTime<Utc>>,
    },

    /// Change fields of an item. At least one field is required.
    Update {
        /// Item to update.
        item: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        calories: Option<f64>,

        #[arg(long, action = clap::ArgAction::Set)]
        visible: Option<bool>,

        /// Allergen tag; repeat for several. Replaces the item's list.
        #[arg(long = "allergen")]
        allergens: Option<Vec<String>>,
    },

    /// Print a read view of the manifest.
    View {
        #[arg(value_enum)]
        kind: ViewKind,

        /// Number of featured items on the board view.
        #[arg(long)]
        featured: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewKind {
    Guest,
    Board,
    Dashboard,
}

/// Collects the field flags of `update` into a change set.
pub fn item_changes(
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    calories: Option<f64>,
    visible: Option<bool>,
    allergens: Option<Vec<String>>,
) -> ItemChanges {
    ItemChanges {
        name,
        description,
        price,
        visible,
        calories,
        allergens,
    }
}
