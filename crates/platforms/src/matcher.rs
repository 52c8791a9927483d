//! Platform compatibility matchers.

use std::fmt;
use std::sync::Arc;

use crate::PlatformSpec;

/// Decides whether a candidate platform is compatible with a bound platform.
pub trait PlatformMatcher: Send + Sync {
    /// Returns true if `candidate` is compatible with this matcher.
    fn matches(&self, candidate: &PlatformSpec) -> bool;

    /// The platform this matcher is bound to, when it has a single one.
    ///
    /// Used for diagnostics only.
    fn spec(&self) -> Option<&PlatformSpec> {
        None
    }
}

impl fmt::Debug for dyn PlatformMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spec() {
            Some(spec) => write!(f, "PlatformMatcher({spec})"),
            None => f.write_str("PlatformMatcher(..)"),
        }
    }
}

/// Matches only the exact bound platform.
///
/// Operating system, architecture and variant must all be equal. A bound
/// spec without a variant does not match a candidate that carries one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrictMatcher {
    spec: PlatformSpec,
}

impl StrictMatcher {
    /// Bind a strict matcher to `spec`.
    #[must_use]
    pub fn new(spec: PlatformSpec) -> Self {
        Self { spec }
    }
}

impl PlatformMatcher for StrictMatcher {
    fn matches(&self, candidate: &PlatformSpec) -> bool {
        self.spec.os == candidate.os
            && self.spec.architecture == candidate.architecture
            && self.spec.variant == candidate.variant
    }

    fn spec(&self) -> Option<&PlatformSpec> {
        Some(&self.spec)
    }
}

/// Create a shared strict matcher for `spec`.
#[must_use]
pub fn only_strict(spec: PlatformSpec) -> Arc<dyn PlatformMatcher> {
    Arc::new(StrictMatcher::new(spec))
}
