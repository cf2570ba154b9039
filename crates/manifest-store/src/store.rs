use async_trait::async_trait;
use serde_json::Value;

use crate::{Result, StoreError, Version};

/// Options for writing the manifest document.
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    /// Version the persisted document must currently have for the write to
    /// proceed. If None, the write is unconditional (use with caution).
    pub expected_version: Option<Version>,
}

impl SaveOptions {
    /// Creates options with no version check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options expecting the persisted document to be at a specific version.
    pub fn expect_version(version: Version) -> Self {
        Self {
            expected_version: Some(version),
        }
    }

    /// Creates options expecting no document to be persisted yet.
    pub fn expect_new() -> Self {
        Self {
            expected_version: Some(Version::initial()),
        }
    }
}

/// Core trait for manifest storage backends.
///
/// A backend holds at most one document. Writes replace the whole document
/// and must be atomic: readers observe either the previous document or the
/// new one. All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait ManifestStore: Send + Sync {
    /// Loads the persisted document.
    ///
    /// Returns None if nothing has been persisted yet, and `Corrupt` if the
    /// persisted bytes are not JSON.
    async fn load_document(&self) -> Result<Option<Value>>;

    /// Replaces the persisted document.
    ///
    /// If `options.expected_version` is set, the write fails with `Conflict`
    /// when the persisted version differs; a missing document counts as
    /// `Version::initial()`. Returns the version of the written document.
    async fn save_document(&self, document: &Value, options: SaveOptions) -> Result<Version>;

    /// Human-readable location of the document, for logs.
    fn location(&self) -> String;
}

/// Extension trait providing convenience methods for manifest stores.
#[async_trait]
pub trait ManifestStoreExt: ManifestStore {
    /// Returns the persisted version, or `Version::initial()` if none.
    async fn current_version(&self) -> Result<Version> {
        match self.load_document().await? {
            Some(document) => document_version(&document),
            None => Ok(Version::initial()),
        }
    }

    /// Checks whether a document has been persisted.
    async fn exists(&self) -> Result<bool> {
        Ok(self.load_document().await?.is_some())
    }
}

impl<T: ManifestStore + ?Sized> ManifestStoreExt for T {}

/// Reads the top-level `version` of a manifest document.
pub fn document_version(document: &Value) -> Result<Version> {
    let raw = document
        .get("version")
        .ok_or_else(|| StoreError::Corrupt("missing field `version`".to_string()))?;
    match raw.as_u64() {
        Some(v) if (1..=Version::MAX).contains(&v) => Ok(Version::new(v)),
        _ => Err(StoreError::Corrupt(format!(
            "`version` must be an integer between 1 and {}, got {raw}",
            Version::MAX
        ))),
    }
}

/// Validates a document before it is written.
///
/// Conditional writes must carry exactly the version after the expected one,
/// so a successful write always advances the persisted version by one.
pub(crate) fn validate_document_for_save(
    document: &Value,
    options: &SaveOptions,
) -> Result<Version> {
    if !document.is_object() {
        return Err(StoreError::InvalidDocument(
            "manifest must be a JSON object".to_string(),
        ));
    }
    let version =
        document_version(document).map_err(|e| StoreError::InvalidDocument(e.to_string()))?;
    if let Some(expected) = options.expected_version
        && expected.next() != Some(version)
    {
        return Err(StoreError::InvalidDocument(format!(
            "document version must follow {expected}, got {version}"
        )));
    }
    Ok(version)
}

/// Checks the persisted version against the expected one.
pub(crate) fn check_expected_version(options: &SaveOptions, actual: Version) -> Result<()> {
    match options.expected_version {
        Some(expected) if expected != actual => Err(StoreError::Conflict { expected, actual }),
        _ => Ok(()),
    }
}
