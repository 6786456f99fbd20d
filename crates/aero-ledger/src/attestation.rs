//! # Attestation — Hash-Linked Tamper Evidence
//!
//! Each event record carries an [`Attestation`] binding its canonical
//! payload bytes to the hash of the preceding record:
//!
//! ```text
//! hash = sha256(previous_hash_utf8 ++ payload_bytes)    (lowercase hex)
//! ```
//!
//! The first record in a stream has no predecessor and hashes its payload
//! alone. Editing, deleting, or reordering any earlier record breaks every
//! hash after it.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Proof that an event is untampered and anchored to its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attestation {
    /// Hex-encoded SHA-256 over the previous hash (when present) and the
    /// canonical payload bytes.
    pub hash: String,
    /// Hash of the preceding record in the aggregate's chain; `None` for
    /// the first record.
    pub previous_hash: Option<String>,
}

impl Attestation {
    /// Compute the attestation for a payload extending `previous_hash`.
    pub fn compute(payload: &[u8], previous_hash: Option<&str>) -> Self {
        let mut hasher = Sha256::new();
        if let Some(previous) = previous_hash {
            hasher.update(previous.as_bytes());
        }
        hasher.update(payload);
        let hash = hasher
            .finalize()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect();

        Self {
            hash,
            previous_hash: previous_hash.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_is_deterministic() {
        let a = Attestation::compute(b"payload", None);
        let b = Attestation::compute(b"payload", None);
        assert_eq!(a, b);
    }

    #[test]
    fn hash_is_lowercase_hex_sha256() {
        let attestation = Attestation::compute(b"payload", None);
        assert_eq!(attestation.hash.len(), 64);
        assert!(attestation
            .hash
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(attestation.previous_hash.is_none());
    }

    #[test]
    fn predecessor_hash_feeds_the_digest() {
        let first = Attestation::compute(b"payload", None);
        let chained = Attestation::compute(b"payload", Some(&first.hash));
        assert_ne!(first.hash, chained.hash);
        assert_eq!(chained.previous_hash.as_deref(), Some(first.hash.as_str()));
    }

    #[test]
    fn different_payloads_hash_differently() {
        assert_ne!(
            Attestation::compute(b"a", None).hash,
            Attestation::compute(b"b", None).hash
        );
    }
}
