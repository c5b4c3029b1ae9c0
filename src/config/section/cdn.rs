//! `[cdn]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [cdn]
//! default = "https://cdn.example.com"
//!
//! [cdn.origins]
//! primary = "https://cdn1.example.com"
//! fallback = "https://cdn2.example.com"
//! ```
//!
//! `default` is used when a call supplies no named override. `origins` maps
//! override names to origin URLs; a named override that is not in the table
//! resolves to no origin at all, never to `default`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// CDN origin table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CdnConfig {
    /// CDN origin used when no named override is supplied.
    pub default: Option<String>,

    /// Named CDN origins for explicit per-call overrides.
    pub origins: FxHashMap<String, String>,
}

impl CdnConfig {
    const FIELD_DEFAULT: FieldPath = FieldPath::new("cdn.default");
    const FIELD_ORIGINS: FieldPath = FieldPath::new("cdn.origins");

    /// Look up a named origin. Returns `None` for unknown names.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.origins.get(name).map(String::as_str)
    }

    /// Validate CDN settings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.default.as_deref().is_some_and(str::is_empty) {
            diag.error_with_hint(
                Self::FIELD_DEFAULT,
                "default origin must not be empty",
                "remove the key or set an origin URL",
            );
        }

        for (name, url) in &self.origins {
            if name.is_empty() {
                diag.error(Self::FIELD_ORIGINS, "origin name must not be empty");
            }
            if url.is_empty() {
                diag.error(
                    Self::FIELD_ORIGINS,
                    format!("origin `{name}` has an empty URL"),
                );
            }
        }
    }
}
