//! Asset URL resolution engine.
//!
//! # Module Structure
//!
//! ```text
//! resolver/
//! ├── origin     # Local-vs-CDN origin selection
//! ├── version    # Version-token computation and splicing
//! ├── compose    # Origin/path joining
//! ├── store      # Filesystem capability (AssetStore, DiskStore)
//! └── mod.rs     # AssetResolver (this file)
//! ```
//!
//! One resolve call walks a fixed sequence: validate the untrusted path,
//! pick an origin, splice in a version token, compose the final URL. A path
//! that fails validation never reaches the versioner, the composer, or the
//! filesystem.

mod compose;
mod origin;
mod store;
mod version;

pub use compose::compose;
pub use store::{AssetStore, DiskStore};

use origin::Origin;

use crate::config::AssetConfig;
use crate::debug;
use crate::env::Profiles;
use crate::error::ResolveError;
use crate::policy;

/// Rewrites static-asset references into final, servable URLs.
///
/// Holds an immutable configuration snapshot, the active-profile signal and
/// the filesystem capability used for hash versioning. Reloading config means
/// constructing a new resolver; there is no in-place mutation, so a resolver
/// can be shared freely across threads.
pub struct AssetResolver {
    config: AssetConfig,
    profiles: Profiles,
    store: Box<dyn AssetStore>,
}

impl AssetResolver {
    /// Create a resolver backed by the real filesystem.
    pub fn new(config: AssetConfig, profiles: Profiles) -> Self {
        Self::with_store(config, profiles, Box::new(DiskStore))
    }

    /// Create a resolver with a custom filesystem capability.
    pub fn with_store(config: AssetConfig, profiles: Profiles, store: Box<dyn AssetStore>) -> Self {
        Self {
            config,
            profiles,
            store,
        }
    }

    /// The configuration snapshot this resolver was built with.
    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    /// Resolve an asset path with no CDN override and no local forcing.
    pub fn resolve(&self, path: &str) -> Result<String, ResolveError> {
        self.resolve_with(path, None, false)
    }

    /// Resolve an asset path into a final, servable URL.
    ///
    /// - `cdn`: named override into the `[cdn.origins]` table. An unknown
    ///   name yields the path unchanged, not the default CDN.
    /// - `force_local`: serve from the local prefix regardless of profiles
    ///   or CDN settings. Wins silently over a supplied `cdn` override.
    ///
    /// When the resolver is disabled, the input is returned verbatim and the
    /// validation policy is bypassed entirely.
    pub fn resolve_with(
        &self,
        path: &str,
        cdn: Option<&str>,
        force_local: bool,
    ) -> Result<String, ResolveError> {
        if !self.config.enabled {
            return Ok(path.to_owned());
        }

        if let Err(reason) = policy::validate(path) {
            debug!("resolve"; "rejected `{path}`: {reason}");
            return Err(ResolveError::Rejected {
                path: path.to_owned(),
                reason,
            });
        }

        match origin::select(&self.config, &self.profiles, cdn, force_local) {
            Origin::Local => {
                let prefixed = match self.config.local_path.as_str() {
                    "" => path.to_owned(),
                    local => compose(local, path),
                };
                version::apply(&prefixed, &self.config, self.store.as_ref())
            }
            Origin::Cdn(url) => {
                let versioned = version::apply(path, &self.config, self.store.as_ref())?;
                Ok(compose(url, &versioned))
            }
            Origin::None => Ok(path.to_owned()),
        }
    }
}

impl std::fmt::Debug for AssetResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetResolver")
            .field("config", &self.config)
            .field("profiles", &self.profiles)
            .finish_non_exhaustive()
    }
}
