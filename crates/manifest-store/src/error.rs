use std::path::PathBuf;

use thiserror::Error;

use crate::Version;

/// Errors that can occur when reading or writing the manifest document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium could not be read, created or written.
    #[error("Manifest storage unavailable at {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted bytes are not a well-formed manifest document.
    #[error("Corrupt manifest document: {0}")]
    Corrupt(String),

    /// A document handed to the store cannot be persisted as given.
    #[error("Invalid manifest document: {0}")]
    InvalidDocument(String),

    /// The persisted version did not match the version the write expected.
    #[error("Version conflict: expected version {expected}, found {actual}")]
    Conflict { expected: Version, actual: Version },
}

impl StoreError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Unavailable {
            path: path.into(),
            source,
        }
    }
}

/// Result type for manifest store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
