//! Content digests for export receipts.
//!
//! A receipt records the SHA-256 of exactly the bytes that were written, so
//! a stored document can later be checked against what the pipeline
//! produced.

use sha2::{Digest, Sha256};

/// Lowercase 64-character hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// True if `bytes` hash to `expected` (hex, any case).
pub fn verify_digest(bytes: &[u8], expected: &str) -> bool {
    sha256_hex(bytes).eq_ignore_ascii_case(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vector() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn tampered_bytes_fail_verification() {
        let digest = sha256_hex(b"Patient Name: Asha");
        assert!(verify_digest(b"Patient Name: Asha", &digest));
        assert!(verify_digest(b"Patient Name: Asha", &digest.to_uppercase()));
        assert!(!verify_digest(b"Patient Name: Asha.", &digest));
    }
}
