use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::store::{
    ManifestStore, SaveOptions, check_expected_version, document_version,
    validate_document_for_save,
};
use crate::{Result, Version};

/// In-memory manifest store for tests and embedding.
///
/// Provides the same interface and version checks as the file-backed store.
#[derive(Clone, Default)]
pub struct InMemoryManifestStore {
    document: Arc<RwLock<Option<Value>>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryManifestStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `document`, bypassing validation.
    ///
    /// Useful for simulating corrupt persisted state.
    pub fn with_document(document: Value) -> Self {
        Self {
            document: Arc::new(RwLock::new(Some(document))),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns the number of successful writes.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Returns a copy of the current document.
    pub async fn snapshot(&self) -> Option<Value> {
        self.document.read().await.clone()
    }
}

#[async_trait]
impl ManifestStore for InMemoryManifestStore {
    async fn load_document(&self) -> Result<Option<Value>> {
        Ok(self.document.read().await.clone())
    }

    async fn save_document(&self, document: &Value, options: SaveOptions) -> Result<Version> {
        let version = validate_document_for_save(document, &options)?;

        let mut slot = self.document.write().await;
        let actual = match slot.as_ref() {
            Some(current) => document_version(current)?,
            None => Version::initial(),
        };
        check_expected_version(&options, actual)?;

        *slot = Some(document.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(version)
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
