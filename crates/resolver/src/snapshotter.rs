//! Snapshotter keys.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Conventional default snapshotter on Linux hosts.
///
/// Only used as the fallback of [`ResolverConfig`](crate::ResolverConfig);
/// the selector always receives its default key explicitly.
pub const DEFAULT_SNAPSHOTTER: &str = "overlayfs";

/// Non-empty name of a snapshotter (storage driver) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SnapshotterKey(String);

impl SnapshotterKey {
    /// Create a key, rejecting empty or whitespace-only names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySnapshotterKey`] if `key` has no content.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::EmptySnapshotterKey);
        }
        Ok(Self(key))
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SnapshotterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SnapshotterKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SnapshotterKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SnapshotterKey {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SnapshotterKey> for String {
    fn from(key: SnapshotterKey) -> Self {
        key.0
    }
}

impl PartialEq<str> for SnapshotterKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SnapshotterKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
