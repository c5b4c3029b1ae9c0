//! Untrusted asset path validation.
//!
//! Layered allow/deny policy applied to every path before any filesystem or
//! origin logic runs. The layers are independent and all mandatory; any one
//! alone is bypassable by encoding tricks. Cheapest checks run first.
//!
//! | Layer       | Rejects                                               |
//! |-------------|-------------------------------------------------------|
//! | (inline)    | Empty or whitespace-only input                        |
//! | `traversal` | `..` segments and their percent-encoded disguises     |
//! | `charset`   | Control characters, shell metacharacters, anything    |
//! |             | outside the character allow-list                      |
//! | `extension` | Filename extensions outside the fixed allow-list      |
//! | `absolute`  | Drive-letter, UNC and sensitive-system-root paths     |

mod absolute;
mod charset;
mod extension;
mod traversal;

use thiserror::Error;

/// Why a path was rejected.
///
/// Carried inside [`ResolveError::Rejected`](crate::ResolveError::Rejected);
/// the variants mirror the policy layers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathRejection {
    #[error("path is empty or whitespace-only")]
    Empty,

    #[error("path contains a traversal sequence")]
    Traversal,

    #[error("path contains a control character")]
    Control,

    #[error("path contains forbidden character `{0}`")]
    Forbidden(char),

    #[error("character `{0}` is not allowed in asset paths")]
    Charset(char),

    #[error("file extension `{0}` is not on the allow-list")]
    Extension(String),

    #[error("absolute or system path is not allowed")]
    Absolute,
}

/// Validate an untrusted asset path against the full policy.
///
/// Must run before any filesystem or origin logic. A path that fails here
/// must never reach the versioner or the composer.
pub fn validate(path: &str) -> Result<(), PathRejection> {
    if path.trim().is_empty() {
        return Err(PathRejection::Empty);
    }
    traversal::check(path)?;
    charset::check(path)?;
    extension::check(path)?;
    absolute::check(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert_eq!(validate(""), Err(PathRejection::Empty));
        assert_eq!(validate("   "), Err(PathRejection::Empty));
        assert_eq!(validate("\t"), Err(PathRejection::Empty));
    }

    #[test]
    fn test_rejects_traversal_attempts() {
        // Plain and encoded traversal signatures, matching the denylist
        let malicious = [
            "../../../etc/passwd",
            "..\\..\\windows\\system32\\config\\sam",
            "../../../../root/.ssh/id_rsa",
            "..%2f..%2f..%2fetc%2fpasswd",
            "%2e%2e/%2e%2e/%2e%2e/etc/passwd",
            "....//....//etc/passwd",
            "..%252f..%252f..%252fetc%252fpasswd",
            "../\u{0}etc/passwd",
            "..\\..\\..\\windows\\system32\\drivers\\etc\\hosts",
        ];
        for path in malicious {
            assert_eq!(validate(path), Err(PathRejection::Traversal), "{path}");
        }
    }

    #[test]
    fn test_rejects_invalid_characters() {
        assert_eq!(
            validate("image<script>.png"),
            Err(PathRejection::Forbidden('<'))
        );
        assert_eq!(
            validate("style>alert().css"),
            Err(PathRejection::Forbidden('>'))
        );
        assert_eq!(validate("file|pipe.js"), Err(PathRejection::Forbidden('|')));
        assert_eq!(
            validate("name?query.png"),
            Err(PathRejection::Forbidden('?'))
        );
        assert_eq!(
            validate("wild*card.jpg"),
            Err(PathRejection::Forbidden('*'))
        );
        assert_eq!(validate("null\u{0}byte.png"), Err(PathRejection::Control));
        assert_eq!(validate("newline\nchar.css"), Err(PathRejection::Control));
        assert_eq!(
            validate("carriage\rreturn.js"),
            Err(PathRejection::Control)
        );
    }

    #[test]
    fn test_rejects_absolute_paths() {
        let absolute = [
            "C:\\windows\\system32\\config\\sam",
            "\\\\server\\share\\file.txt",
            "D:\\sensitive\\data.txt",
            "/etc/passwd",
            "\\windows\\system32\\drivers\\etc\\hosts",
        ];
        for path in absolute {
            assert!(validate(path).is_err(), "{path}");
        }
    }

    #[test]
    fn test_rejects_dangerous_extensions() {
        let dangerous = [
            "malware.exe",
            "script.bat",
            "virus.com",
            "trojan.scr",
            "backdoor.cmd",
            "shell.sh",
            "config.ini",
            "database.db",
            "backup.sql",
        ];
        for path in dangerous {
            assert!(
                matches!(validate(path), Err(PathRejection::Extension(_))),
                "{path}"
            );
        }
    }

    #[test]
    fn test_accepts_valid_asset_paths() {
        let valid = [
            "image.jpg",
            "style.css",
            "script.js",
            "font.woff2",
            "document.pdf",
            "data.json",
            "favicon.ico",
            "logo.svg",
            "animation.gif",
            "music.mp3",
        ];
        for path in valid {
            assert_eq!(validate(path), Ok(()), "{path}");
        }
    }

    #[test]
    fn test_accepts_paths_with_spaces() {
        assert_eq!(validate("my image.jpg"), Ok(()));
    }

    #[test]
    fn test_accepts_paths_without_extension() {
        assert_eq!(validate("favicon"), Ok(()));
    }

    #[test]
    fn test_accepts_nested_relative_paths() {
        assert_eq!(validate("img/icons/arrow-left.svg"), Ok(()));
        assert_eq!(validate("/styles/main.css"), Ok(()));
    }
}
