//! Application configuration loaded from environment variables.

use std::path::{Path, PathBuf};

/// Default manifest location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/menu.json";

/// Runtime configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `MENU_DATA_PATH`: manifest file (default: `data/menu.json`); relative
///   paths resolve against the working directory
/// - `MENUFLOW_FEATURED_COUNT`: items featured on boards (default: `4`)
/// - `MENUFLOW_LOG_FORMAT`: `json` for JSON log lines, anything else for text
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_path: PathBuf,
    pub featured_count: usize,
    pub log_json: bool,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            data_path: resolve_data_path(std::env::var("MENU_DATA_PATH").ok().as_deref(), &cwd),
            featured_count: std::env::var("MENUFLOW_FEATURED_COUNT")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(projections::views::DEFAULT_FEATURED_COUNT),
            log_json: std::env::var("MENUFLOW_LOG_FORMAT")
                .map(|f| f.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Replaces the manifest path, resolving it against the working directory.
    pub fn with_data_path(mut self, path: &Path) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        self.data_path = cwd.join(path);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            featured_count: projections::views::DEFAULT_FEATURED_COUNT,
            log_json: false,
            log_level: "info".to_string(),
        }
    }
}

/// Resolves the manifest path from an optional override.
///
/// Empty overrides are ignored. Absolute overrides are used as-is.
pub fn resolve_data_path(custom: Option<&str>, cwd: &Path) -> PathBuf {
    match custom {
        Some(path) if !path.trim().is_empty() => cwd.join(path),
        _ => cwd.join(DEFAULT_DATA_PATH),
    }
}
