//! Origin/path joining.

/// Join an origin and a path with exactly one `/` at the seam.
///
/// Strips a single trailing `/` from the origin, strips all leading `/` from
/// the path, then joins with one. Idempotent under repeated slash
/// normalization: `compose("https://cdn/", "/x")`, `compose("https://cdn",
/// "x")` and `compose("https://cdn", "/x")` all produce `"https://cdn/x"`.
pub fn compose(origin: &str, path: &str) -> String {
    let origin = origin.strip_suffix('/').unwrap_or(origin);
    let path = path.trim_start_matches('/');
    format!("{origin}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_placement_idempotent() {
        assert_eq!(compose("https://cdn", "x"), "https://cdn/x");
        assert_eq!(compose("https://cdn/", "x"), "https://cdn/x");
        assert_eq!(compose("https://cdn", "/x"), "https://cdn/x");
        assert_eq!(compose("https://cdn/", "/x"), "https://cdn/x");
    }

    #[test]
    fn test_local_prefix() {
        assert_eq!(compose("/assets", "logo.svg"), "/assets/logo.svg");
        assert_eq!(compose("/assets/", "/logo.svg"), "/assets/logo.svg");
    }

    #[test]
    fn test_collapses_duplicate_leading_slashes() {
        assert_eq!(compose("https://cdn", "//x"), "https://cdn/x");
    }

    #[test]
    fn test_nested_path_untouched() {
        assert_eq!(
            compose("https://cdn.example.com", "img/icons/arrow.svg"),
            "https://cdn.example.com/img/icons/arrow.svg"
        );
    }
}
