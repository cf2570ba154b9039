use serde::{Deserialize, Serialize};

/// Declares an opaque string identifier.
///
/// Identifiers in the manifest are caller-chosen strings (slugs such as
/// `"latte"`), so each newtype only prevents mixing up an item id with a
/// category id at compile time.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a menu document.
    MenuId
);

string_id!(
    /// Identifier of the store that owns a menu, category or item.
    StoreId
);

string_id!(
    /// Identifier of a menu category.
    CategoryId
);

string_id!(
    /// Identifier of a menu item.
    ItemId
);
