//! Integration tests for rendering views from the live manifest.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use domain::{ItemChanges, MenuError, MenuService, SetAvailability, UpdateItem};
use manifest_store::{InMemoryManifestStore, Version};
use projections::{BoardView, DashboardView, GuestMenuView, ViewReader};

fn setup() -> (
    Arc<MenuService<InMemoryManifestStore>>,
    ViewReader<InMemoryManifestStore>,
) {
    let service = Arc::new(MenuService::new(InMemoryManifestStore::new()));
    let reader = ViewReader::new(Arc::clone(&service));
    (service, reader)
}

#[tokio::test]
async fn views_reflect_admin_mutations() {
    let (service, reader) = setup();
    let noon = Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap();
    let five_pm = Utc.with_ymd_and_hms(2030, 1, 1, 17, 0, 0).unwrap();

    service
        .set_availability(SetAvailability::sold_out_until("latte", five_pm))
        .await
        .unwrap();
    service
        .update_item(UpdateItem::new("fries", ItemChanges::new().visible(false)))
        .await
        .unwrap();

    let dashboard = reader.render_at(&DashboardView, noon).await.unwrap();
    assert_eq!(dashboard.version, Version::new(3));
    assert_eq!(dashboard.sold_out_count, 1);
    assert_eq!(dashboard.hidden_count, 2);

    let board = reader.render_at(&BoardView::default(), noon).await.unwrap();
    assert_eq!(board.version, Version::new(3));
    assert_eq!(board.sold_out.len(), 1);
    assert_eq!(board.sold_out[0].id.as_str(), "latte");

    let guest = reader.render_at(&GuestMenuView, noon).await.unwrap();
    let sides = guest
        .sections
        .iter()
        .find(|s| s.category_id.as_str() == "sides")
        .unwrap();
    assert!(sides.items.is_empty());
}

#[tokio::test]
async fn first_render_seeds_the_manifest() {
    let (service, reader) = setup();
    let summary = reader.render(&DashboardView).await.unwrap();
    assert_eq!(summary.version, Version::first());
    assert_eq!(service.store().write_count(), 1);
}

#[tokio::test]
async fn corrupt_manifest_propagates_to_views() {
    let store = InMemoryManifestStore::with_document(serde_json::json!({ "version": "x" }));
    let reader = ViewReader::new(Arc::new(MenuService::new(store)));
    let result = reader.render(&GuestMenuView).await;
    assert!(matches!(result, Err(MenuError::CorruptState(_))));
}
