//! Resolution error taxonomy.
//!
//! Two failure classes leave a `resolve` call:
//! - [`ResolveError::Rejected`]: the untrusted path failed validation. Always
//!   surfaced to the caller, never recovered internally.
//! - [`ResolveError::SecurityFault`]: a post-validation containment check
//!   failed, meaning the normalization and validation layers disagreed. Fatal
//!   for the call.
//!
//! A missing or unreadable file during hash versioning is *not* an error: the
//! resolver falls back to the unversioned path silently.

use thiserror::Error;

use crate::policy::PathRejection;

/// Errors surfaced by [`AssetResolver::resolve`](crate::AssetResolver::resolve).
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The untrusted path failed the validation policy.
    #[error("invalid asset path `{path}`: {reason}")]
    Rejected {
        /// The rejected input, verbatim.
        path: String,
        /// Which policy layer rejected it.
        reason: PathRejection,
    },

    /// A containment check failed after validation had already passed.
    ///
    /// This signals a possible validator bypass and must never degrade to
    /// "skip versioning".
    #[error("asset security fault for `{path}`: {detail}")]
    SecurityFault { path: String, detail: String },
}

impl ResolveError {
    /// The validation rejection reason, if this is a rejection.
    pub fn rejection(&self) -> Option<&PathRejection> {
        match self {
            Self::Rejected { reason, .. } => Some(reason),
            Self::SecurityFault { .. } => None,
        }
    }
}
