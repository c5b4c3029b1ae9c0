//! Active deployment profile signal.
//!
//! The host supplies an ordered list of active profile names (e.g. `["dev"]`,
//! `["staging", "eu"]`). The resolver only asks one question of it: does the
//! process run in a development environment?

/// Ordered list of active deployment profile names.
///
/// Invariants:
/// - Order is preserved as supplied by the host
/// - An empty list counts as development (no profile configured yet)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profiles(Vec<String>);

impl Profiles {
    /// Create from an ordered list of profile names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// No active profiles (treated as development).
    pub fn none() -> Self {
        Self::default()
    }

    /// Active profile names, in the order supplied.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Check whether the active profiles signal a development environment.
    ///
    /// True when any profile is `dev` or `development` (case-insensitive),
    /// or when no profile is active at all.
    pub fn is_development(&self) -> bool {
        if self.0.is_empty() {
            return true;
        }
        self.0
            .iter()
            .any(|p| p.eq_ignore_ascii_case("dev") || p.eq_ignore_ascii_case("development"))
    }
}

impl<S: Into<String>> FromIterator<S> for Profiles {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
