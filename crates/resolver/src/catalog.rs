//! Ordered catalog of supported platform/snapshotter pairings.
//!
//! A [`Catalog`] is an immutable snapshot. Registration order is preserved
//! and significant: the selector returns the first satisfying entry.

use std::fmt;
use std::sync::Arc;

use unpack_platforms::{PlatformMatcher, PlatformSpec, only_strict};

use crate::SnapshotterKey;

/// A platform matcher paired with the snapshotter that supports it.
#[derive(Clone)]
pub struct SupportedPairing {
    /// Platforms this pairing applies to.
    pub matcher: Arc<dyn PlatformMatcher>,
    /// Snapshotter used for matching platforms.
    pub snapshotter: SnapshotterKey,
}

impl SupportedPairing {
    /// Pair an arbitrary matcher with a snapshotter.
    #[must_use]
    pub fn new(matcher: Arc<dyn PlatformMatcher>, snapshotter: SnapshotterKey) -> Self {
        Self {
            matcher,
            snapshotter,
        }
    }

    /// Pair a strict matcher for `platform` with a snapshotter.
    #[must_use]
    pub fn strict(platform: PlatformSpec, snapshotter: SnapshotterKey) -> Self {
        Self::new(only_strict(platform), snapshotter)
    }
}

impl fmt::Debug for SupportedPairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupportedPairing")
            .field("platform", &self.matcher.spec())
            .field("snapshotter", &self.snapshotter.as_str())
            .finish()
    }
}

/// Immutable, ordered sequence of supported pairings.
///
/// Cloning shares the underlying storage.
#[derive(Clone, Debug)]
pub struct Catalog {
    pairings: Arc<[SupportedPairing]>,
}

impl Catalog {
    /// Create a catalog from pairings in priority order.
    #[must_use]
    pub fn new(pairings: Vec<SupportedPairing>) -> Self {
        Self {
            pairings: pairings.into(),
        }
    }

    /// A catalog with no pairings.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Start building a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Iterate pairings in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SupportedPairing> {
        self.pairings.iter()
    }

    /// Number of pairings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// Whether the catalog has no pairings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// A new catalog with `pairing` appended after the existing entries.
    #[must_use]
    pub fn with_pairing(&self, pairing: SupportedPairing) -> Self {
        let mut pairings = Vec::with_capacity(self.pairings.len() + 1);
        pairings.extend(self.pairings.iter().cloned());
        pairings.push(pairing);
        Self::new(pairings)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<SupportedPairing> for Catalog {
    fn from_iter<I: IntoIterator<Item = SupportedPairing>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a SupportedPairing;
    type IntoIter = std::slice::Iter<'a, SupportedPairing>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairings.iter()
    }
}

/// Builder that records pairings in registration order.
#[derive(Default, Debug)]
pub struct CatalogBuilder {
    pairings: Vec<SupportedPairing>,
}

impl CatalogBuilder {
    /// Append a pairing.
    #[must_use]
    pub fn push(mut self, pairing: SupportedPairing) -> Self {
        self.pairings.push(pairing);
        self
    }

    /// Append a strict pairing for `platform`.
    #[must_use]
    pub fn strict(self, platform: PlatformSpec, snapshotter: SnapshotterKey) -> Self {
        self.push(SupportedPairing::strict(platform, snapshotter))
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Catalog {
        Catalog::new(self.pairings)
    }
}
