//! Local-vs-CDN origin selection.
//!
//! Precedence: per-call `force_local` flag, then dev-profile auto-local,
//! then the named override table, then the default CDN. A *named* override
//! that is missing from the table yields no origin at all; it never falls
//! back to the default silently.

use crate::config::AssetConfig;
use crate::env::Profiles;

/// Where the asset URL is rooted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Origin<'a> {
    /// Serve from the local path prefix.
    Local,
    /// Serve from a CDN origin URL.
    Cdn(&'a str),
    /// No usable origin; the path is returned unchanged.
    None,
}

pub(crate) fn select<'a>(
    config: &'a AssetConfig,
    profiles: &Profiles,
    cdn: Option<&str>,
    force_local: bool,
) -> Origin<'a> {
    if force_local {
        return Origin::Local;
    }
    if config.use_local_in_dev && profiles.is_development() {
        return Origin::Local;
    }

    let chosen = match cdn.filter(|name| !name.is_empty()) {
        Some(name) => config.cdn.lookup(name),
        None => config.cdn.default.as_deref(),
    };

    match chosen {
        Some(url) if !url.is_empty() => Origin::Cdn(url),
        _ => Origin::None,
    }
}
