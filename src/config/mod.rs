//! Asset resolution configuration snapshot.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── cdn        # [cdn]
//! │   └── version    # [version]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # AssetConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | (top level) | Master switch, local prefix, dev behavior      |
//! | `[cdn]`     | Default origin and named origin table          |
//! | `[version]` | Cache-busting token strategy and lookup root   |
//!
//! The snapshot is immutable once constructed: the host parses it at startup
//! and hands it to [`AssetResolver`](crate::AssetResolver) by value. Reload
//! means building a new resolver around a new snapshot, never mutation in
//! place.

pub mod section;
pub mod types;

pub use section::{CdnConfig, VersionConfig, VersionStrategy};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use serde::{Deserialize, Serialize};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure for asset resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Master on/off switch. When false, `resolve` returns its input
    /// verbatim and the validation policy is bypassed entirely.
    pub enabled: bool,

    /// Prefix applied to local-origin output (e.g. `/assets`).
    pub local_path: String,

    /// Auto-select the local origin when a development profile is active.
    pub use_local_in_dev: bool,

    /// CDN origin settings.
    pub cdn: CdnConfig,

    /// Cache-busting settings.
    pub version: VersionConfig,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            local_path: String::new(),
            use_local_in_dev: true,
            cdn: CdnConfig::default(),
            version: VersionConfig::default(),
        }
    }
}

impl AssetConfig {
    const FIELD_LOCAL_PATH: FieldPath = FieldPath::new("local_path");

    /// Parse configuration from a TOML snapshot string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    ///
    /// Lets the host warn on config typos instead of silently ignoring them.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Validate the snapshot.
    ///
    /// Collects all validation errors and returns them at once; warnings and
    /// hints are printed, not returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        if !self.local_path.is_empty() && !self.local_path.starts_with('/') {
            diag.hint(
                Self::FIELD_LOCAL_PATH,
                format!(
                    "`{}` does not start with `/`; local URLs will be relative",
                    self.local_path
                ),
            );
        }

        self.cdn.validate(&mut diag);
        self.version.validate(&mut diag);

        diag.print_warnings();

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse a config snapshot for tests.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> AssetConfig {
    let (parsed, ignored) = AssetConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
