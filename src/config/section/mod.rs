//! Configuration section definitions.

mod cdn;
mod version;

pub use cdn::CdnConfig;
pub use version::{VersionConfig, VersionStrategy};
