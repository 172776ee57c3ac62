//! Version and build metadata.
//!
//! Build date, number, hash and toolchain are stamped by the release pipeline
//! through compile-time environment variables (`ZK_JANITOR_BUILD_DATE`,
//! `ZK_JANITOR_BUILD_NUMBER`, `ZK_JANITOR_BUILD_HASH`,
//! `ZK_JANITOR_RUSTC_VERSION`). Local builds fall back to the epoch date,
//! empty identifiers and an `unknown` toolchain.

use std::fmt;

use serde::Serialize;

const DEFAULT_BUILD_DATE: &str = "1970-01-01T00:00:00Z";
const UNKNOWN_TOOLCHAIN: &str = "unknown";

/// Build metadata reported by `--build-info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_date: &'static str,
    pub build_number: &'static str,
    pub build_hash: &'static str,
    pub platform: String,
    pub rust_version: &'static str,
}

impl BuildInfo {
    /// Metadata for the running binary.
    pub fn current(version: &'static str) -> Self {
        Self {
            version,
            build_date: option_env!("ZK_JANITOR_BUILD_DATE").unwrap_or(DEFAULT_BUILD_DATE),
            build_number: option_env!("ZK_JANITOR_BUILD_NUMBER").unwrap_or_default(),
            build_hash: option_env!("ZK_JANITOR_BUILD_HASH").unwrap_or_default(),
            platform: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
            rust_version: option_env!("ZK_JANITOR_RUSTC_VERSION").unwrap_or(UNKNOWN_TOOLCHAIN),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Version\t\t: {}", self.version)?;
        writeln!(f, "Build Date\t: {}", self.build_date)?;
        writeln!(f, "Build Number\t: {}", self.build_number)?;
        writeln!(f, "Build Hash\t: {}", self.build_hash)?;
        writeln!(f, "Platform\t: {}", self.platform)?;
        write!(f, "Rust Version\t: {}", self.rust_version)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_unstamped_toolchain_falls_back() {
        let info = BuildInfo::current("1.0.0");
        let expected = option_env!("ZK_JANITOR_RUSTC_VERSION").unwrap_or("unknown");
        assert_eq!(info.rust_version, expected);
        assert!(!info.rust_version.is_empty());
    }

    #[test]
    fn test_current_uses_given_version() {
        let info = BuildInfo::current("1.0.0");
        assert_eq!(info.version, "1.0.0");
        assert!(info.platform.contains('/'));
    }

    #[test]
    fn test_display_lists_every_field() {
        let info = BuildInfo::current("1.0.0");
        let rendered = info.to_string();
        for label in [
            "Version\t\t:",
            "Build Date\t:",
            "Build Number\t:",
            "Build Hash\t:",
            "Platform\t:",
            "Rust Version\t:",
        ] {
            assert!(rendered.contains(label), "missing {label}");
        }
        assert_eq!(rendered.lines().count(), 6);
        assert!(rendered.ends_with(&format!("Rust Version\t: {}", info.rust_version)));
    }

    #[test]
    fn test_serializes_to_json() {
        let info = BuildInfo::current("1.0.0");
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["version"], "1.0.0");
        assert!(json.get("build_hash").is_some());
        assert!(json["rust_version"].is_string());
    }
}
