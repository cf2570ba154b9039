use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::store::{
    ManifestStore, SaveOptions, check_expected_version, document_version,
    validate_document_for_save,
};
use crate::{Result, StoreError, Version};

/// File-backed manifest store.
///
/// The document is written pretty-printed to a temporary file next to the
/// target and renamed over it, so readers never observe a partial write.
/// Writes through clones of one store are serialized by a shared lock; the
/// version check guards against other processes writing the same file.
#[derive(Clone)]
pub struct FileManifestStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileManifestStore {
    /// Creates a store for the manifest at `path`. Nothing is touched on disk
    /// until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the manifest path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Option<Value>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::unavailable(&self.path, e)),
        };
        let document = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", self.path.display())))?;
        Ok(Some(document))
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

#[async_trait]
impl ManifestStore for FileManifestStore {
    async fn load_document(&self) -> Result<Option<Value>> {
        let document = self.read_document().await?;
        tracing::debug!(path = %self.path.display(), found = document.is_some(), "loaded manifest");
        Ok(document)
    }

    async fn save_document(&self, document: &Value, options: SaveOptions) -> Result<Version> {
        let version = validate_document_for_save(document, &options)?;
        let bytes = serde_json::to_vec_pretty(document)
            .map_err(|e| StoreError::InvalidDocument(e.to_string()))?;

        let _guard = self.write_lock.lock().await;

        if options.expected_version.is_some() {
            let actual = match self.read_document().await? {
                Some(current) => document_version(&current)?,
                None => Version::initial(),
            };
            check_expected_version(&options, actual)?;
        }

        let started = Instant::now();
        let dir = self.parent_dir();
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&dir, &path, &bytes))
            .await
            .map_err(|e| StoreError::unavailable(&self.path, std::io::Error::other(e)))?
            .map_err(|e| StoreError::unavailable(&self.path, e))?;
        metrics::histogram!("manifest_write_duration_seconds")
            .record(started.elapsed().as_secs_f64());

        tracing::debug!(path = %self.path.display(), %version, "persisted manifest");
        Ok(version)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn write_atomic(dir: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(data)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
