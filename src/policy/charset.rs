//! Character policy: control/metacharacter denylist, then allow-list.
//!
//! Two passes in fixed order. The denylist catches characters with a known
//! attack surface (header injection, shell globbing, markup breakout); the
//! allow-list then bounds everything else to letters, digits and a small set
//! of path punctuation.

use super::PathRejection;

pub(super) fn check(path: &str) -> Result<(), PathRejection> {
    for c in path.chars() {
        match c {
            '\0' | '\r' | '\n' => return Err(PathRejection::Control),
            '<' | '>' | '"' | '|' | '?' | '*' => return Err(PathRejection::Forbidden(c)),
            _ => {}
        }
    }

    for c in path.chars() {
        if !is_allowed(c) {
            return Err(PathRejection::Charset(c));
        }
    }

    Ok(())
}

/// Letters, digits, and path punctuation. Nothing else.
#[inline]
fn is_allowed(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '/' | '-' | '_' | '.' | ' ')
}
