//! Platform specification value type and host detection.
//!
//! Names follow the OCI image-spec conventions (`linux/amd64`,
//! `linux/arm/v7`, `darwin/arm64`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A target runtime platform: operating system, architecture and an
/// optional variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlatformSpec {
    /// Operating system (linux, windows, darwin).
    pub os: String,
    /// CPU architecture (amd64, arm64, arm, 386).
    pub architecture: String,
    /// Architecture variant (v7, v8), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl PlatformSpec {
    /// Create a platform without a variant.
    #[must_use]
    pub fn new(os: impl Into<String>, architecture: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            architecture: architecture.into(),
            variant: None,
        }
    }

    /// Set the architecture variant.
    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Shorthand for a `linux/<architecture>` platform.
    #[must_use]
    pub fn linux(architecture: impl Into<String>) -> Self {
        Self::new("linux", architecture)
    }
}

impl fmt::Display for PlatformSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.architecture)?;
        if let Some(variant) = &self.variant {
            write!(f, "/{variant}")?;
        }
        Ok(())
    }
}

/// Get the platform of the running process, using OCI names.
///
/// No variant is derived, so 32-bit arm hosts report plain `linux/arm`.
#[must_use]
pub fn host_platform() -> PlatformSpec {
    let os = match std::env::consts::OS {
        "macos" => "darwin",
        other => other,
    };
    PlatformSpec::new(
        os,
        oci_architecture(std::env::consts::ARCH, cfg!(target_endian = "little")),
    )
}

/// Map a Rust architecture name to its OCI name.
///
/// Architectures without a known OCI spelling keep their Rust name.
fn oci_architecture(arch: &str, little_endian: bool) -> &str {
    match (arch, little_endian) {
        ("x86_64", _) => "amd64",
        ("aarch64", _) => "arm64",
        ("x86", _) => "386",
        ("powerpc64", true) => "ppc64le",
        ("powerpc64", false) => "ppc64",
        ("mips64", true) => "mips64le",
        ("mips", true) => "mipsle",
        ("loongarch64", _) => "loong64",
        (other, _) => other,
    }
}
