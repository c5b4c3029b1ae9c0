//! `[version]` section configuration.
//!
//! Controls the cache-busting token spliced into asset filenames.
//!
//! # Example
//!
//! ```toml
//! [version]
//! enable = true
//! strategy = "hash"       # or "timestamp"
//! base_path = "static"    # filesystem root for hash lookups only
//! ```
//!
//! `base_path` is never echoed into output URLs; it exists solely so the
//! hash strategy can read file bytes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// How the version token is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionStrategy {
    /// MD5 digest of the file content. Changes only when the bytes change.
    Hash,
    /// Wall-clock milliseconds since the Unix epoch. Changes every call.
    Timestamp,
}

/// Cache-busting settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    /// Enable version-token append.
    pub enable: bool,

    /// Token derivation strategy.
    pub strategy: VersionStrategy,

    /// Filesystem root for hash lookups.
    pub base_path: PathBuf,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            enable: true,
            strategy: VersionStrategy::Hash,
            base_path: PathBuf::from("static"),
        }
    }
}

impl VersionConfig {
    const FIELD_BASE_PATH: FieldPath = FieldPath::new("version.base_path");

    /// Validate versioning settings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable
            && self.strategy == VersionStrategy::Hash
            && self.base_path.as_os_str().is_empty()
        {
            diag.warn(
                Self::FIELD_BASE_PATH,
                "hash strategy with an empty base_path will never find files; \
                 assets will be served unversioned",
            );
        }
    }
}
