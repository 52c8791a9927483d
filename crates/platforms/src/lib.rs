//! Platform specifications and matchers for container image unpacking.
//!
//! This crate is the platform side of the unpack resolver:
//! - [`PlatformSpec`] names a runtime target (os/architecture/variant)
//! - [`PlatformMatcher`] decides whether a candidate spec is compatible
//! - [`StrictMatcher`] is the exact-equality matcher used by the resolver
//!
//! Platform identifiers are never parsed from strings here. Callers build
//! specs from structured fields, either directly or through configuration.
//!
//! # Example
//!
//! ```
//! use unpack_platforms::{PlatformSpec, only_strict};
//!
//! let matcher = only_strict(PlatformSpec::new("linux", "arm64"));
//! assert!(matcher.matches(&PlatformSpec::new("linux", "arm64")));
//! assert!(!matcher.matches(&PlatformSpec::new("linux", "amd64")));
//! ```

#![warn(missing_docs)]

mod matcher;
mod spec;

pub use matcher::{PlatformMatcher, StrictMatcher, only_strict};
pub use spec::{PlatformSpec, host_platform};
