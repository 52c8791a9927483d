//! Platform and snapshotter selection for container image unpacking.
//!
//! When a multi-platform image is pulled, the unpack stage must decide which
//! registered (platform, snapshotter) pairing materializes the layers. This
//! crate provides:
//! - [`Catalog`]: the ordered, immutable list of supported pairings
//! - [`Selector`]: the first-match resolution rule over a catalog
//! - [`SnapshotterRegistry`]: thread-safe catalog publication
//! - [`ResolverConfig`]: TOML configuration for the registry
//!
//! # Example
//!
//! ```
//! use unpack_platforms::PlatformSpec;
//! use unpack_resolver::{Catalog, Selector, SnapshotterKey, UnpackRequest};
//!
//! # fn main() -> unpack_resolver::Result<()> {
//! let catalog = Catalog::builder()
//!     .strict(PlatformSpec::linux("amd64"), SnapshotterKey::new("native")?)
//!     .strict(PlatformSpec::linux("amd64"), SnapshotterKey::new("overlayfs")?)
//!     .build();
//!
//! let selector = Selector::new(SnapshotterKey::new("overlayfs")?);
//! let resolved = selector.require(&UnpackRequest::new(PlatformSpec::linux("amd64")), &catalog)?;
//! assert_eq!(resolved.snapshotter, "overlayfs");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod catalog;
mod config;
mod error;
mod registry;
mod selector;
mod snapshotter;

pub use catalog::{Catalog, CatalogBuilder, SupportedPairing};
pub use config::{PairingConfig, ResolverConfig};
pub use error::{Error, Result};
pub use registry::SnapshotterRegistry;
pub use selector::{MatchResult, ResolvedPairing, Selector, UnpackRequest, resolve};
pub use snapshotter::{DEFAULT_SNAPSHOTTER, SnapshotterKey};
