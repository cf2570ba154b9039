//! Durable storage for the MenuFlow manifest.
//!
//! The manifest is a single JSON document. This crate knows only that the
//! document carries a top-level `version`; schema validation lives in the
//! domain crate.

pub mod error;
pub mod file;
pub mod memory;
pub mod store;
pub mod version;

pub use error::{Result, StoreError};
pub use file::FileManifestStore;
pub use memory::InMemoryManifestStore;
pub use store::{ManifestStore, ManifestStoreExt, SaveOptions, document_version};
pub use version::Version;
