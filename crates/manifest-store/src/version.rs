use serde::{Deserialize, Serialize};

/// Version number of the manifest, used for optimistic concurrency control.
///
/// A persisted manifest starts at version 1 and every successful mutation
/// advances it by exactly one. Version 0 stands for "nothing persisted yet".
/// Versions never exceed [`Version::MAX`], the largest integer a JSON number
/// holds exactly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Version(u64);

impl Version {
    /// Largest version a manifest may carry (2^53 - 1).
    pub const MAX: u64 = 9_007_199_254_740_991;

    /// Creates a new version from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the version of a manifest that has not been written yet.
    pub fn initial() -> Self {
        Self(0)
    }

    /// Returns the version of a freshly seeded manifest.
    pub fn first() -> Self {
        Self(1)
    }

    /// Returns the next version, or None once [`Version::MAX`] is reached.
    pub fn next(&self) -> Option<Self> {
        self.0
            .checked_add(1)
            .filter(|v| *v <= Self::MAX)
            .map(Self)
    }

    /// Returns the raw version value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Version {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Version> for u64 {
    fn from(version: Version) -> Self {
        version.0
    }
}
