//! Platform/snapshotter selection.
//!
//! Resolution walks the catalog in order and returns the first pairing whose
//! matcher accepts the requested platform and whose snapshotter satisfies the
//! request:
//! - an explicit snapshotter must be equal to the pairing's key
//! - no snapshotter means the pairing's key must be the default snapshotter
//!
//! Platform compatibility alone never selects a pairing.

use tracing::{debug, trace};
use unpack_platforms::PlatformSpec;

use crate::{Catalog, Error, Result, SnapshotterKey};

/// Platform and snapshotter preference for one unpack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpackRequest {
    /// Platform to unpack for.
    pub platform: PlatformSpec,
    /// Preferred snapshotter; `None` means use the default.
    pub snapshotter: Option<SnapshotterKey>,
}

impl UnpackRequest {
    /// Request `platform` with no snapshotter preference.
    #[must_use]
    pub fn new(platform: PlatformSpec) -> Self {
        Self {
            platform,
            snapshotter: None,
        }
    }

    /// Prefer a specific snapshotter.
    #[must_use]
    pub fn with_snapshotter(mut self, snapshotter: SnapshotterKey) -> Self {
        self.snapshotter = Some(snapshotter);
        self
    }
}

/// The pairing chosen for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPairing {
    /// The requested platform.
    pub platform: PlatformSpec,
    /// Snapshotter from the matching catalog entry.
    pub snapshotter: SnapshotterKey,
}

/// Outcome of resolving a request against a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// A pairing satisfied the request.
    Matched(ResolvedPairing),
    /// No pairing satisfied the request.
    NoMatch,
}

impl MatchResult {
    /// Whether a pairing was found.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// The resolved pairing, if any.
    #[must_use]
    pub fn resolved(&self) -> Option<&ResolvedPairing> {
        match self {
            Self::Matched(resolved) => Some(resolved),
            Self::NoMatch => None,
        }
    }

    /// Consume the result, returning the resolved pairing, if any.
    #[must_use]
    pub fn into_resolved(self) -> Option<ResolvedPairing> {
        match self {
            Self::Matched(resolved) => Some(resolved),
            Self::NoMatch => None,
        }
    }
}

/// Stateless selector bound to the process default snapshotter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    default_snapshotter: SnapshotterKey,
}

impl Selector {
    /// Create a selector that uses `default_snapshotter` for requests
    /// without a snapshotter preference.
    #[must_use]
    pub fn new(default_snapshotter: SnapshotterKey) -> Self {
        Self {
            default_snapshotter,
        }
    }

    /// The default snapshotter key.
    #[must_use]
    pub fn default_snapshotter(&self) -> &SnapshotterKey {
        &self.default_snapshotter
    }

    /// Resolve `request` against `catalog`.
    #[must_use]
    pub fn resolve(&self, request: &UnpackRequest, catalog: &Catalog) -> MatchResult {
        resolve(request, catalog, &self.default_snapshotter)
    }

    /// Resolve `request`, turning a no-match into a descriptive error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlatform`] naming the platform and the
    /// effective snapshotter when no pairing satisfies the request.
    pub fn require(&self, request: &UnpackRequest, catalog: &Catalog) -> Result<ResolvedPairing> {
        self.resolve(request, catalog).into_resolved().ok_or_else(|| {
            let wanted = request
                .snapshotter
                .as_ref()
                .unwrap_or(&self.default_snapshotter);
            Error::unsupported_platform(request.platform.clone(), wanted.as_str())
        })
    }
}

/// Resolve `request` against `catalog`, using `default_snapshotter` when the
/// request has no snapshotter preference.
///
/// The earliest satisfying pairing wins; later entries are not inspected.
#[must_use]
pub fn resolve(
    request: &UnpackRequest,
    catalog: &Catalog,
    default_snapshotter: &SnapshotterKey,
) -> MatchResult {
    let wanted = request.snapshotter.as_ref().unwrap_or(default_snapshotter);

    for (index, pairing) in catalog.iter().enumerate() {
        if !pairing.matcher.matches(&request.platform) {
            trace!(index, platform = %request.platform, "Skipping pairing: platform mismatch");
            continue;
        }
        if pairing.snapshotter != *wanted {
            trace!(
                index,
                snapshotter = %pairing.snapshotter,
                wanted = %wanted,
                "Skipping pairing: snapshotter mismatch"
            );
            continue;
        }

        debug!(
            index,
            platform = %request.platform,
            snapshotter = %pairing.snapshotter,
            "Resolved unpack pairing"
        );
        return MatchResult::Matched(ResolvedPairing {
            platform: request.platform.clone(),
            snapshotter: pairing.snapshotter.clone(),
        });
    }

    debug!(
        platform = %request.platform,
        snapshotter = %wanted,
        candidates = catalog.len(),
        "No supported pairing for request"
    );
    MatchResult::NoMatch
}
