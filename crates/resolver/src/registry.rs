//! Snapshotter registry.
//!
//! The registry owns the current catalog and publishes a new catalog value
//! on every registration. Resolution works on a snapshot taken before the
//! walk, so registrations never race with an in-flight resolution.

use parking_lot::RwLock;
use tracing::info;

use crate::{
    Catalog, MatchResult, ResolvedPairing, ResolverConfig, Result, Selector, SnapshotterKey,
    SupportedPairing, UnpackRequest,
};

/// Thread-safe owner of the process catalog and default snapshotter.
#[derive(Debug)]
pub struct SnapshotterRegistry {
    selector: Selector,
    catalog: RwLock<Catalog>,
}

impl SnapshotterRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new(default_snapshotter: SnapshotterKey) -> Self {
        Self::with_catalog(default_snapshotter, Catalog::empty())
    }

    /// Create a registry seeded with `catalog`.
    #[must_use]
    pub fn with_catalog(default_snapshotter: SnapshotterKey, catalog: Catalog) -> Self {
        Self {
            selector: Selector::new(default_snapshotter),
            catalog: RwLock::new(catalog),
        }
    }

    /// Create a registry from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured pairing is invalid.
    pub fn from_config(config: &ResolverConfig) -> Result<Self> {
        let registry = Self::with_catalog(config.default_snapshotter()?, config.to_catalog()?);
        info!(
            default_snapshotter = %registry.default_snapshotter(),
            pairings = registry.len(),
            "Initialized snapshotter registry"
        );
        Ok(registry)
    }

    /// The default snapshotter key.
    #[must_use]
    pub fn default_snapshotter(&self) -> &SnapshotterKey {
        self.selector.default_snapshotter()
    }

    /// Append a pairing after all existing ones.
    pub fn register(&self, pairing: SupportedPairing) {
        let snapshotter = pairing.snapshotter.clone();
        let pairings = {
            let mut catalog = self.catalog.write();
            *catalog = catalog.with_pairing(pairing);
            catalog.len()
        };
        info!(
            %snapshotter,
            pairings,
            "Registered snapshotter pairing"
        );
    }

    /// Replace the whole catalog.
    pub fn publish(&self, catalog: Catalog) {
        let pairings = catalog.len();
        *self.catalog.write() = catalog;
        info!(pairings, "Published snapshotter catalog");
    }

    /// The current catalog.
    #[must_use]
    pub fn snapshot(&self) -> Catalog {
        self.catalog.read().clone()
    }

    /// Number of registered pairings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.read().len()
    }

    /// Whether no pairings are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.read().is_empty()
    }

    /// Resolve against the current catalog.
    #[must_use]
    pub fn resolve(&self, request: &UnpackRequest) -> MatchResult {
        self.selector.resolve(request, &self.snapshot())
    }

    /// Resolve against the current catalog, failing on no match.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnsupportedPlatform`] when nothing matches.
    pub fn require(&self, request: &UnpackRequest) -> Result<ResolvedPairing> {
        self.selector.require(request, &self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use unpack_platforms::PlatformSpec;

    fn key(name: &str) -> SnapshotterKey {
        SnapshotterKey::new(name).unwrap()
    }

    #[test]
    fn test_register_then_resolve() {
        let registry = SnapshotterRegistry::new(key("overlayfs"));
        let request = UnpackRequest::new(PlatformSpec::linux("arm64"));
        assert!(!registry.resolve(&request).is_matched());

        registry.register(SupportedPairing::strict(
            PlatformSpec::linux("arm64"),
            key("overlayfs"),
        ));
        let resolved = registry.require(&request).unwrap();
        assert_eq!(resolved.snapshotter, "overlayfs");
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_registration() {
        let registry = SnapshotterRegistry::new(key("overlayfs"));
        let before = registry.snapshot();
        registry.register(SupportedPairing::strict(
            PlatformSpec::linux("amd64"),
            key("native"),
        ));

        assert!(before.is_empty());
        assert_eq!(registry.snapshot().len(), 1);
    }

    #[test]
    fn test_publish_replaces_catalog() {
        let registry = SnapshotterRegistry::new(key("overlayfs"));
        registry.register(SupportedPairing::strict(
            PlatformSpec::linux("amd64"),
            key("native"),
        ));
        registry.publish(Catalog::empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_concurrent_registration_and_resolution() {
        let registry = Arc::new(SnapshotterRegistry::new(key("overlayfs")));
        let request = UnpackRequest::new(PlatformSpec::linux("amd64"));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                let request = request.clone();
                thread::spawn(move || {
                    let name = if i % 2 == 0 { "overlayfs" } else { "native" };
                    registry.register(SupportedPairing::strict(
                        PlatformSpec::linux("amd64"),
                        key(name),
                    ));
                    let seen = registry.snapshot().len();
                    assert!((1..=8).contains(&seen), "snapshot had {seen} pairings");

                    match registry.resolve(&request) {
                        MatchResult::NoMatch => {}
                        MatchResult::Matched(resolved) => {
                            assert_eq!(resolved.snapshotter, "overlayfs");
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 8);
        let resolved = registry.require(&request).unwrap();
        assert_eq!(resolved.snapshotter, "overlayfs");
    }
}
