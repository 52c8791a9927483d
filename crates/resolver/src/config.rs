//! Resolver configuration.
//!
//! ```toml
//! defaultSnapshotter = "overlayfs"
//!
//! [[pairings]]
//! snapshotter = "native"
//! platform = { os = "linux", architecture = "amd64" }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use unpack_platforms::PlatformSpec;

use crate::{
    Catalog, DEFAULT_SNAPSHOTTER, Error, Result, Selector, SnapshotterKey, SupportedPairing,
};

/// Snapshotter registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResolverConfig {
    /// Snapshotter used when a request names none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_snapshotter: Option<SnapshotterKey>,

    /// Supported pairings in priority order.
    #[serde(default)]
    pub pairings: Vec<PairingConfig>,
}

/// One configured platform/snapshotter pairing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PairingConfig {
    /// Platform matched strictly. Required; a pairing never matches
    /// every platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformSpec>,

    /// Snapshotter supporting the platform.
    pub snapshotter: SnapshotterKey,
}

impl ResolverConfig {
    /// Parse configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a snapshotter key is empty.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
        let config = Self::from_toml_str(&source)?;
        debug!(
            path = %path.display(),
            pairings = config.pairings.len(),
            "Loaded resolver configuration"
        );
        Ok(config)
    }

    /// The configured default snapshotter, falling back to
    /// [`DEFAULT_SNAPSHOTTER`].
    ///
    /// # Errors
    ///
    /// Returns an error if the fallback key fails validation.
    pub fn default_snapshotter(&self) -> Result<SnapshotterKey> {
        match &self.default_snapshotter {
            Some(key) => Ok(key.clone()),
            None => SnapshotterKey::new(DEFAULT_SNAPSHOTTER),
        }
    }

    /// Build a selector for the configured default snapshotter.
    ///
    /// # Errors
    ///
    /// See [`ResolverConfig::default_snapshotter`].
    pub fn selector(&self) -> Result<Selector> {
        Ok(Selector::new(self.default_snapshotter()?))
    }

    /// Build the catalog, preserving configuration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if a pairing has no platform.
    pub fn to_catalog(&self) -> Result<Catalog> {
        self.pairings
            .iter()
            .enumerate()
            .map(|(index, pairing)| {
                let platform = pairing.platform.clone().ok_or_else(|| {
                    Error::configuration(format!(
                        "pairing {index} ({}) has no platform",
                        pairing.snapshotter
                    ))
                })?;
                Ok(SupportedPairing::strict(platform, pairing.snapshotter.clone()))
            })
            .collect::<Result<Vec<_>>>()
            .map(Catalog::new)
    }
}
