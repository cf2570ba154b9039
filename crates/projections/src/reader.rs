//! Reads the manifest and renders views.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::{MenuService, Result};
use manifest_store::ManifestStore;

use crate::projection::MenuProjection;

/// Renders projections from the current manifest.
///
/// Each call performs one `read()` on the menu service; errors from the read
/// are returned unchanged.
pub struct ViewReader<S: ManifestStore> {
    service: Arc<MenuService<S>>,
}

impl<S: ManifestStore> ViewReader<S> {
    /// Creates a reader over a shared menu service.
    pub fn new(service: Arc<MenuService<S>>) -> Self {
        Self { service }
    }

    /// Renders `projection` as of now.
    pub async fn render<P: MenuProjection>(&self, projection: &P) -> Result<P::View> {
        self.render_at(projection, Utc::now()).await
    }

    /// Renders `projection` as of `now`.
    #[tracing::instrument(skip(self, projection), fields(view = projection.name()))]
    pub async fn render_at<P: MenuProjection>(
        &self,
        projection: &P,
        now: DateTime<Utc>,
    ) -> Result<P::View> {
        let menu = self.service.read().await?;
        metrics::counter!("projections_views_rendered", "view" => projection.name()).increment(1);
        tracing::debug!(version = %menu.version, "rendering view");
        Ok(projection.project(&menu, now))
    }
}
