//! Content fingerprints
//!
//! SHA-256 hex digests shown alongside comparison results and served by the
//! `/api/digest` endpoints. Fingerprints are for display and auditing only;
//! no equality decision in the comparison path depends on them.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of a string.
pub fn sha256_hex(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check content against a previously computed hex digest.
pub fn verify_sha256(content: &str, comparison: &str) -> bool {
    sha256_hex(content) == comparison
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA256: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_sha256_hex_known_value() {
        assert_eq!(sha256_hex(""), EMPTY_SHA256);
        // 64 hex characters, lowercase
        let digest = sha256_hex("hello");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn test_sha256_hex_distinguishes_content() {
        assert_ne!(sha256_hex("a"), sha256_hex("b"));
        assert_eq!(sha256_hex("same"), sha256_hex("same"));
    }

    #[test]
    fn test_verify_sha256() {
        assert!(verify_sha256("", EMPTY_SHA256));
        assert!(!verify_sha256("not empty", EMPTY_SHA256));
    }
}
