//! CDN-aware static asset URL resolution with path validation and cache busting.
//!
//! Rewrites a static-asset reference (an image, stylesheet or script path
//! embedded in a document) into a final, servable URL. The resolver chooses
//! between a local path and one of several configured CDN origins, optionally
//! appends a content- or time-based version token, and rejects any input that
//! could escape the asset root or reference a disallowed resource type.
//!
//! # Module Structure
//!
//! ```text
//! cachet/
//! ├── config/      # Configuration snapshot ([cdn], [version] sections)
//! ├── policy/      # Untrusted path validation (traversal, charset, extension, absolute)
//! ├── resolver/    # Origin selection, versioning, URL composition
//! ├── env          # Active deployment profile signal
//! ├── error        # Resolution error taxonomy
//! ├── logger       # log! / debug! terminal output
//! └── utils/       # Content hashing
//! ```
//!
//! # Example
//!
//! ```ignore
//! use cachet::{AssetConfig, AssetResolver, Profiles};
//!
//! let config = AssetConfig::from_str(r#"
//!     local_path = "/assets"
//!
//!     [cdn]
//!     default = "https://cdn.example.com"
//! "#)?;
//!
//! let resolver = AssetResolver::new(config, Profiles::new(["prod"]));
//! let url = resolver.resolve("styles.css")?;
//! // "https://cdn.example.com/styles.<md5>.css"
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod logger;
pub mod policy;
pub mod resolver;
pub mod utils;

pub use config::{AssetConfig, CdnConfig, ConfigError, VersionConfig, VersionStrategy};
pub use env::Profiles;
pub use error::ResolveError;
pub use policy::PathRejection;
pub use resolver::{AssetResolver, AssetStore, DiskStore, compose};
