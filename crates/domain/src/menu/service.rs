//! Menu service: the single reader and writer of the manifest.

use chrono::{DateTime, Utc};
use manifest_store::{ManifestStore, SaveOptions, StoreError, Version};
use serde::Serialize;
use tokio::sync::Mutex;

use super::commands::{SetAvailability, UpdateItem};
use super::model::Menu;
use super::seed::sample_menu;
use crate::error::{MenuError, Result};

/// The manifest as published to read surfaces.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedManifest {
    pub menu: Menu,
    pub version: Version,
    pub published_at: DateTime<Utc>,
}

/// Service for reading and mutating the menu manifest.
///
/// Every operation re-reads the manifest from the store; nothing is cached
/// between calls. Mutations are whole-document read-modify-write cycles,
/// serialized within this service and persisted with the version they were
/// based on, so a write racing another process fails with `Conflict`
/// instead of overwriting it.
pub struct MenuService<S: ManifestStore> {
    store: S,
    seed: Menu,
    mutation_lock: Mutex<()>,
}

impl<S: ManifestStore> MenuService<S> {
    /// Creates a service that seeds empty storage with the sample menu.
    pub fn new(store: S) -> Self {
        Self::with_seed(store, sample_menu())
    }

    /// Creates a service that seeds empty storage with `seed`.
    pub fn with_seed(store: S, seed: Menu) -> Self {
        Self {
            store,
            seed,
            mutation_lock: Mutex::new(()),
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the menu, writing the seed menu first if nothing is persisted.
    #[tracing::instrument(skip(self), fields(location = %self.store.location()))]
    pub async fn load(&self) -> Result<Menu> {
        match self.store.load_document().await? {
            Some(document) => Menu::from_document(document),
            None => self.initialize().await,
        }
    }

    /// Returns the current persisted menu, fully validated.
    ///
    /// Reading a location that has never been written seeds it, exactly as
    /// [`load`](Self::load) does.
    pub async fn read(&self) -> Result<Menu> {
        self.load().await
    }

    /// Returns the current menu with its version and a publish timestamp.
    pub async fn manifest(&self) -> Result<PublishedManifest> {
        let menu = self.read().await?;
        Ok(PublishedManifest {
            version: menu.version,
            menu,
            published_at: Utc::now(),
        })
    }

    /// Sets or clears an item's sold-out window.
    ///
    /// Any instant is accepted, past or future. Always advances the version.
    #[tracing::instrument(skip(self), fields(item_id = %cmd.item_id))]
    pub async fn set_availability(&self, cmd: SetAvailability) -> Result<Menu> {
        self.mutate("set_availability", |menu| {
            let item = menu
                .item(&cmd.item_id)
                .ok_or_else(|| MenuError::NotFound(cmd.item_id.clone()))?;
            let mut next = item.clone();
            next.sold_out_until = cmd.sold_out_until;
            Ok(Some(menu.with_item(next)?))
        })
        .await
    }

    /// Applies a partial update to an item.
    ///
    /// An update with no fields is a no-op: nothing is written and the
    /// version does not advance. The item must still exist.
    #[tracing::instrument(skip(self), fields(item_id = %cmd.item_id))]
    pub async fn update_item(&self, cmd: UpdateItem) -> Result<Menu> {
        self.mutate("update_item", |menu| {
            let item = menu
                .item(&cmd.item_id)
                .ok_or_else(|| MenuError::NotFound(cmd.item_id.clone()))?;
            if cmd.changes.is_empty() {
                return Ok(None);
            }
            let next = cmd.changes.apply_to(item)?;
            Ok(Some(menu.with_item(next)?))
        })
        .await
    }

    /// Replaces the whole menu in one mutation.
    ///
    /// The version carried by `menu` is ignored. The replacement is stamped
    /// with the version after the persisted one, so replacing never moves
    /// the version backwards.
    #[tracing::instrument(skip(self, menu), fields(menu_id = %menu.id))]
    pub async fn replace_menu(&self, menu: Menu) -> Result<Menu> {
        self.mutate("replace_menu", |current| {
            let mut next = menu;
            next.version = current.next_version()?;
            Ok(Some(next))
        })
        .await
    }

    async fn initialize(&self) -> Result<Menu> {
        self.seed.validate()?;
        let mut seed = self.seed.clone();
        seed.version = Version::first();

        match self
            .store
            .save_document(&seed.to_document()?, SaveOptions::expect_new())
            .await
        {
            Ok(_) => {
                metrics::counter!("manifest_seed_writes_total").increment(1);
                tracing::info!(menu_id = %seed.id, "seeded empty manifest storage");
                Ok(seed)
            }
            // Another writer seeded it first; use theirs.
            Err(StoreError::Conflict { .. }) => match self.store.load_document().await? {
                Some(document) => Menu::from_document(document),
                None => Err(MenuError::CorruptState(
                    "manifest vanished during initialization".to_string(),
                )),
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Runs one read-modify-write cycle.
    ///
    /// `change` receives the current menu and returns the next one, or None
    /// when there is nothing to write.
    async fn mutate<F>(&self, operation: &'static str, change: F) -> Result<Menu>
    where
        F: FnOnce(&Menu) -> Result<Option<Menu>>,
    {
        let _guard = self.mutation_lock.lock().await;
        let current = self.load().await?;

        let next = match change(&current).and_then(|next| {
            if let Some(menu) = &next {
                menu.validate()?;
            }
            Ok(next)
        }) {
            Ok(Some(next)) => next,
            Ok(None) => {
                tracing::debug!(operation, version = %current.version, "no changes to persist");
                return Ok(current);
            }
            Err(e) => {
                metrics::counter!("manifest_mutations_rejected", "operation" => operation)
                    .increment(1);
                tracing::warn!(operation, error = %e, "mutation rejected");
                return Err(e);
            }
        };

        self.store
            .save_document(
                &next.to_document()?,
                SaveOptions::expect_version(current.version),
            )
            .await?;

        metrics::counter!("manifest_mutations_total", "operation" => operation).increment(1);
        tracing::info!(operation, version = %next.version, "manifest updated");
        Ok(next)
    }
}
