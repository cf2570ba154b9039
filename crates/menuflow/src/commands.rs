//! Executes parsed commands against the menu service.

use std::sync::Arc;

use anyhow::bail;
use chrono::Utc;
use domain::{Menu, MenuError, MenuService, SetAvailability, UpdateItem};
use manifest_store::ManifestStore;
use projections::{BoardView, DashboardView, GuestMenuView, ViewReader};
use serde_json::{Value, json};

use crate::cli::{Command, ViewKind, item_changes};
use crate::config::Config;

fn mutation_response(menu: &Menu) -> anyhow::Result<Value> {
    Ok(json!({ "ok": true, "menu": serde_json::to_value(menu)? }))
}

/// Runs `command` and returns the JSON document to print.
#[tracing::instrument(skip_all)]
pub async fn run<S: ManifestStore>(
    command: Command,
    service: Arc<MenuService<S>>,
    config: &Config,
) -> anyhow::Result<Value> {
    match command {
        Command::Show => Ok(serde_json::to_value(service.manifest().await?)?),
        Command::EightySix { item, until } => {
            let menu = service
                .set_availability(SetAvailability::new(item, until))
                .await?;
            mutation_response(&menu)
        }
        Command::Update {
            item,
            name,
            description,
            price,
            calories,
            visible,
            allergens,
        } => {
            let changes = item_changes(name, description, price, calories, visible, allergens);
            if changes.is_empty() {
                bail!("provide at least one field to update");
            }
            let menu = service.update_item(UpdateItem::new(item, changes)).await?;
            mutation_response(&menu)
        }
        Command::View { kind, featured } => {
            let reader = ViewReader::new(service);
            let now = Utc::now();
            let view = match kind {
                ViewKind::Guest => {
                    serde_json::to_value(reader.render_at(&GuestMenuView, now).await?)?
                }
                ViewKind::Board => {
                    let board = BoardView::new(featured.unwrap_or(config.featured_count));
                    let summary = reader.render_at(&board, now).await?;
                    json!({
                        "footer": summary.footer(),
                        "board": serde_json::to_value(&summary)?,
                    })
                }
                ViewKind::Dashboard => {
                    serde_json::to_value(reader.render_at(&DashboardView, now).await?)?
                }
            };
            Ok(view)
        }
    }
}

/// What the binary prints to stdout, and whether the command succeeded.
#[derive(Debug)]
pub struct Report {
    pub body: String,
    pub success: bool,
}

/// Renders a command result. Errors, including failures to render the
/// output itself, become `{error, status}` documents.
pub fn report(result: anyhow::Result<Value>) -> Report {
    match result.and_then(|output| Ok(serde_json::to_string_pretty(&output)?)) {
        Ok(body) => Report {
            body,
            success: true,
        },
        Err(err) => {
            let status = err
                .downcast_ref::<MenuError>()
                .map_or(400, MenuError::status_code);
            tracing::error!(error = %err, status, "command failed");
            Report {
                body: json!({ "error": err.to_string(), "status": status }).to_string(),
                success: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifest_store::InMemoryManifestStore;

    fn service() -> Arc<MenuService<InMemoryManifestStore>> {
        Arc::new(MenuService::new(InMemoryManifestStore::new()))
    }

    #[tokio::test]
    async fn update_without_fields_is_refused_before_the_store() {
        let service = service();
        let command = Command::Update {
            item: "latte".into(),
            name: None,
            description: None,
            price: None,
            calories: None,
            visible: None,
            allergens: None,
        };
        let err = run(command, Arc::clone(&service), &Config::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("at least one field"));
        assert_eq!(service.store().write_count(), 0);
    }

    #[tokio::test]
    async fn eighty_six_returns_ok_and_menu() {
        let until = "2030-01-01T17:00:00Z".parse().unwrap();
        let command = Command::EightySix {
            item: "latte".into(),
            until: Some(until),
        };
        let out = run(command, service(), &Config::default()).await.unwrap();
        assert_eq!(out["ok"], true);
        assert_eq!(out["menu"]["version"], 2);
    }

    #[tokio::test]
    async fn unknown_item_surfaces_menu_error() {
        let command = Command::EightySix {
            item: "ghost".into(),
            until: None,
        };
        let err = run(command, service(), &Config::default()).await.unwrap_err();
        let menu_err = err.downcast_ref::<MenuError>().unwrap();
        assert_eq!(menu_err.status_code(), 404);
    }

    #[tokio::test]
    async fn board_view_uses_configured_featured_count() {
        let config = Config {
            featured_count: 2,
            ..Config::default()
        };
        let command = Command::View {
            kind: ViewKind::Board,
            featured: None,
        };
        let out = run(command, service(), &config).await.unwrap();
        assert_eq!(out["board"]["featured"].as_array().unwrap().len(), 2);
        assert_eq!(out["footer"], "Manifest v1 · All items available");
    }

    #[tokio::test]
    async fn show_prints_published_manifest() {
        let out = run(Command::Show, service(), &Config::default()).await.unwrap();
        assert_eq!(out["version"], 1);
        assert_eq!(out["menu"]["id"], "menu-demo-bistro");
        assert!(out["publishedAt"].is_string());
    }

    #[tokio::test]
    async fn report_maps_menu_errors_to_status() {
        let command = Command::EightySix {
            item: "ghost".into(),
            until: None,
        };
        let report = report(run(command, service(), &Config::default()).await);
        assert!(!report.success);
        let body: Value = serde_json::from_str(&report.body).unwrap();
        assert_eq!(body["status"], 404);
        assert!(body["error"].as_str().unwrap().contains("ghost"));
    }

    #[test]
    fn report_defaults_other_errors_to_bad_request() {
        let report = report(Err(anyhow::anyhow!("provide at least one field to update")));
        assert!(!report.success);
        let body: Value = serde_json::from_str(&report.body).unwrap();
        assert_eq!(body["status"], 400);
    }

    #[test]
    fn report_pretty_prints_success() {
        let report = report(Ok(json!({ "ok": true })));
        assert!(report.success);
        assert_eq!(report.body, "{\n  \"ok\": true\n}");
    }
}
