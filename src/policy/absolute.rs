//! Absolute and system path rejection.
//!
//! A `/`-rooted path is a legitimate site-relative reference and passes,
//! unless it points into a sensitive system root. Everything that looks like
//! a foreign filesystem address (drive letters, UNC shares, backslash roots)
//! is rejected outright.

use std::path::Path;

use super::PathRejection;

/// System roots no asset reference may equal or live under.
const SENSITIVE_ROOTS: &[&str] = &["/etc", "/bin", "/usr", "/root", "/etc/passwd"];

pub(super) fn check(path: &str) -> Result<(), PathRejection> {
    if has_drive_prefix(path) || path.starts_with('\\') {
        return Err(PathRejection::Absolute);
    }

    if !path.starts_with('/') {
        // A path the OS considers absolute but that is not `/`-rooted is a
        // foreign filesystem address, not a site-relative reference.
        if Path::new(path).is_absolute() {
            return Err(PathRejection::Absolute);
        }
        return Ok(());
    }

    for root in SENSITIVE_ROOTS {
        let nested = path
            .strip_prefix(root)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
        if nested {
            return Err(PathRejection::Absolute);
        }
    }

    Ok(())
}

/// `C:\` style drive-letter pattern, anywhere in the string.
fn has_drive_prefix(path: &str) -> bool {
    path.as_bytes()
        .windows(3)
        .any(|w| w[0].is_ascii_alphabetic() && w[1] == b':' && w[2] == b'\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_letter_paths() {
        assert!(check("C:\\windows\\system32\\config\\sam").is_err());
        assert!(check("D:\\sensitive\\data.txt").is_err());
        assert!(check("nested/C:\\x").is_err());
    }

    #[test]
    fn test_unc_and_backslash_roots() {
        assert!(check("\\\\server\\share\\file.txt").is_err());
        assert!(check("\\windows\\system32\\drivers\\etc\\hosts").is_err());
    }

    #[test]
    fn test_sensitive_roots() {
        assert!(check("/etc/passwd").is_err());
        assert!(check("/etc").is_err());
        assert!(check("/bin/sh").is_err());
        assert!(check("/usr/lib/secret").is_err());
        assert!(check("/root/.ssh/id_rsa").is_err());
    }

    #[test]
    fn test_sensitive_root_requires_segment_boundary() {
        // `/etcetera` is not `/etc`
        assert!(check("/etcetera/style.css").is_ok());
        assert!(check("/usrdata/app.js").is_ok());
    }

    #[test]
    fn test_site_relative_paths_pass() {
        assert!(check("/assets/app.css").is_ok());
        assert!(check("/styles/main.css").is_ok());
        assert!(check("img/logo.png").is_ok());
    }
}
