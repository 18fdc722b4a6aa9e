//! Dataset fingerprinting.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 fingerprint of the raw dataset bytes.
///
/// Returns the lowercase hexadecimal digest. The value is reported by the
/// health endpoint so operators can tell which snapshot a server loaded.
pub fn dataset_fingerprint(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_consistency() {
        let content = b"dteday,casual\n2011-01-01,331\n";
        assert_eq!(dataset_fingerprint(content), dataset_fingerprint(content));
    }

    #[test]
    fn test_different_content_different_fingerprint() {
        let a = dataset_fingerprint(b"dteday,casual\n2011-01-01,331\n");
        let b = dataset_fingerprint(b"dteday,casual\n2011-01-01,332\n");
        assert_ne!(a, b);
    }

    #[test]
    fn test_fingerprint_of_empty_input() {
        assert_eq!(
            dataset_fingerprint(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
