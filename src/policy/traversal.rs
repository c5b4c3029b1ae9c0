//! Traversal-sequence denylist.
//!
//! First security layer: rejects `..` path segments and their percent-encoded
//! disguises before any other inspection. Matching is case-insensitive.
//!
//! The character allow-list already bans `%` and `\`, so the encoded
//! signatures below overlap with later layers. They are checked here anyway:
//! each layer must hold on its own.

use super::PathRejection;

/// Percent-encoded and double-percent-encoded `..` variants, plus the
/// quadruple-dot evasion that survives naive `../` stripping.
const ENCODED_SIGNATURES: &[&str] = &[
    "%2e%2e/",
    "%2e%2e\\",
    "..%2f",
    "..%5c",
    "%2e%2e%2f",
    "%2e%2e%5c",
    "..%252f",
    "..%255c",
    "....//",
    "....\\\\",
];

pub(super) fn check(path: &str) -> Result<(), PathRejection> {
    // A literal `..` segment, regardless of separator style: covers `../`,
    // `..\` and a bare `..`.
    if path.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(PathRejection::Traversal);
    }

    let lower = path.to_ascii_lowercase();
    if ENCODED_SIGNATURES.iter().any(|sig| lower.contains(sig)) {
        return Err(PathRejection::Traversal);
    }

    Ok(())
}
