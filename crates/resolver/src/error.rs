//! Error types for the unpack resolver

// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;
use unpack_platforms::PlatformSpec;

/// Error type for resolver operations
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A snapshotter key was empty
    #[error("Snapshotter key must not be empty")]
    #[diagnostic(
        code(unpack::resolver::empty_snapshotter),
        help("Omit the snapshotter entirely to use the default snapshotter")
    )]
    EmptySnapshotterKey,

    /// No registered pairing satisfies an unpack request
    #[error("Platform {platform} with snapshotter {snapshotter} is not supported")]
    #[diagnostic(
        code(unpack::resolver::unsupported),
        help("Register a pairing for this platform or request a different snapshotter")
    )]
    UnsupportedPlatform {
        /// The requested platform
        platform: PlatformSpec,
        /// The effective snapshotter (requested or default)
        snapshotter: String,
    },

    /// Invalid resolver configuration
    #[error("Resolver configuration error: {message}")]
    #[diagnostic(code(unpack::resolver::config))]
    Configuration {
        /// Error message describing the configuration issue
        message: String,
    },

    /// I/O error while reading configuration
    #[error("Failed to read {}", path.display())]
    #[diagnostic(
        code(unpack::resolver::io),
        help("Check that the configuration file exists and is readable")
    )]
    Io {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Path that caused the error
        path: Box<Path>,
    },

    /// Malformed TOML configuration
    #[error("Invalid resolver configuration: {0}")]
    #[diagnostic(code(unpack::resolver::toml))]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create an unsupported platform error
    #[must_use]
    pub fn unsupported_platform(platform: PlatformSpec, snapshotter: impl Into<String>) -> Self {
        Self::UnsupportedPlatform {
            platform,
            snapshotter: snapshotter.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration {
            message: msg.into(),
        }
    }

    /// Create an I/O error with path context
    #[must_use]
    pub fn io(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Io {
            source,
            path: path.as_ref().into(),
        }
    }
}

/// Result type for resolver operations
pub type Result<T> = std::result::Result<T, Error>;
