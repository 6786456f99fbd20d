//! # Canonical Serialization
//!
//! [`CanonicalBytes`] is the sole construction path for the bytes an
//! attestation hashes. Two payloads that differ only in key order, timezone
//! spelling, or float formatting must never hash differently, so every
//! payload is coerced before serialization:
//!
//! 1. Floats are rejected — monetary amounts are integers or strings.
//! 2. Strings that parse as RFC 3339 instants are normalized to UTC with a
//!    `Z` suffix, truncated to whole seconds.
//! 3. Objects serialize with lexicographically sorted keys and compact
//!    separators (`serde_json`'s default map is ordered).
//!
//! The inner `Vec<u8>` is private; the only constructor is
//! [`CanonicalBytes::new`], so no digest can be computed over bytes that
//! skipped the pipeline.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Errors during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalError {
    /// Float values are not permitted in canonical payloads.
    /// Amounts must be strings or integers.
    #[error("float values are not permitted in canonical event payloads; use string or integer amounts: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed during canonicalization.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Bytes produced exclusively by the canonicalization pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Canonicalize any serializable value.
    pub fn new(payload: &impl Serialize) -> Result<Self, CanonicalError> {
        let value = serde_json::to_value(payload)?;
        let coerced = coerce(value)?;
        Ok(Self(serde_json::to_vec(&coerced)?))
    }

    /// The canonical bytes, for hashing.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Recursively apply the coercion rules.
fn coerce(value: Value) -> Result<Value, CanonicalError> {
    match value {
        Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                if n.is_f64() && !n.is_i64() && !n.is_u64() {
                    return Err(CanonicalError::FloatRejected(f));
                }
            }
            Ok(Value::Number(n))
        }
        Value::String(s) => match chrono::DateTime::parse_from_rfc3339(&s) {
            Ok(instant) => {
                let utc = instant.with_timezone(&chrono::Utc);
                Ok(Value::String(utc.format("%Y-%m-%dT%H:%M:%SZ").to_string()))
            }
            Err(_) => Ok(Value::String(s)),
        },
        Value::Array(items) => {
            let coerced: Result<Vec<_>, _> = items.into_iter().map(coerce).collect();
            Ok(Value::Array(coerced?))
        }
        Value::Object(map) => {
            let mut coerced = serde_json::Map::new();
            for (key, item) in map {
                coerced.insert(key, coerce(item)?);
            }
            Ok(Value::Object(coerced))
        }
        other => Ok(other),
    }
}
