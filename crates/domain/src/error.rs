//! Domain error types.

use common::ItemId;
use manifest_store::{StoreError, Version};
use thiserror::Error;

/// A mutation or persisted document violates a menu constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during menu operations.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The backing medium could not be read, initialized or written.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] StoreError),

    /// The persisted manifest does not conform to the menu schema.
    #[error("Corrupt manifest: {0}")]
    CorruptState(String),

    /// The referenced item does not exist in the current menu.
    #[error("Menu item {0} not found")]
    NotFound(ItemId),

    /// A supplied change violates a menu constraint.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The persisted version moved while a mutation was in flight.
    #[error("Manifest version conflict: expected version {expected}, found {actual}")]
    Conflict { expected: Version, actual: Version },
}

impl MenuError {
    /// HTTP-style status a calling boundary should report for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            MenuError::NotFound(_) => 404,
            MenuError::Validation(_) => 400,
            MenuError::Conflict { .. } => 409,
            MenuError::StorageUnavailable(_) | MenuError::CorruptState(_) => 500,
        }
    }
}

impl From<StoreError> for MenuError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Corrupt(msg) | StoreError::InvalidDocument(msg) => {
                MenuError::CorruptState(msg)
            }
            StoreError::Conflict { expected, actual } => MenuError::Conflict { expected, actual },
            unavailable @ StoreError::Unavailable { .. } => {
                MenuError::StorageUnavailable(unavailable)
            }
        }
    }
}

/// Result type for menu operations.
pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_onto_menu_kinds() {
        let corrupt: MenuError = StoreError::Corrupt("bad".into()).into();
        assert!(matches!(corrupt, MenuError::CorruptState(_)));

        let conflict: MenuError = StoreError::Conflict {
            expected: Version::new(1),
            actual: Version::new(2),
        }
        .into();
        assert!(matches!(conflict, MenuError::Conflict { .. }));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let unavailable: MenuError = StoreError::Unavailable {
            path: "data/menu.json".into(),
            source: io,
        }
        .into();
        assert!(matches!(unavailable, MenuError::StorageUnavailable(_)));
    }

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(MenuError::NotFound(ItemId::new("x")).status_code(), 404);
        assert_eq!(
            MenuError::Validation(ValidationError::new("price", "must be >= 0")).status_code(),
            400
        );
        assert_eq!(MenuError::CorruptState("x".into()).status_code(), 500);
    }

    #[test]
    fn validation_error_names_field() {
        let err = ValidationError::new("name", "must not be empty");
        assert_eq!(err.to_string(), "invalid name: must not be empty");
    }
}
