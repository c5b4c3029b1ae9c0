//! Content hashing for version tokens.
//!
//! MD5 via the RustCrypto `md-5` crate. MD5 is used as a content
//! fingerprint for cache busting, not for integrity or authentication.
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let token = hash::md5_hex("some content"); // -> 32 lowercase hex chars
//! ```

use md5::{Digest, Md5};

/// Compute the lowercase hex MD5 digest of byte data.
#[inline]
pub fn md5_hex<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    hex::encode(Md5::digest(data.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex_known_digest() {
        assert_eq!(md5_hex("hello world"), "5eb63bbbe01eeed093cb22bb8f5acdc3");
    }

    #[test]
    fn test_md5_hex_is_lowercase_32_chars() {
        let digest = md5_hex(b"body { color: red; }");
        assert_eq!(digest, "f2b804d3e3bd61d76922a667f90e66d8");
        assert_eq!(digest.len(), 32);
        assert!(digest.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }

    #[test]
    fn test_md5_hex_content_sensitivity() {
        // Same content = same digest, different content = different digest
        assert_eq!(md5_hex("a"), md5_hex("a"));
        assert_ne!(md5_hex("a"), md5_hex("b"));
    }
}
