//! # Identifier Newtypes
//!
//! Distinct string-wrapped identities for the two aggregates. Construction
//! validates eagerly: a blank identifier is rejected before it can circulate.
//! Equality is by value, never by storage identity.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Immutable identity of a flight, e.g. `FL-123`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FlightId(String);

impl FlightId {
    /// Wrap a flight identifier, rejecting empty or whitespace-only input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyIdentifier { kind: "FlightId" });
        }
        Ok(Self(value))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Externally visible ticket number, e.g. `TCK-4F9A21D0B7C3`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketNumber(String);

impl TicketNumber {
    /// Wrap a ticket number, rejecting empty or whitespace-only input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyIdentifier { kind: "TicketNumber" });
        }
        Ok(Self(value))
    }

    /// Generate a fresh ticket number: the fixed `TCK-` prefix and a random
    /// twelve-character uppercase hex suffix. The format is stable and easy
    /// to read in logs; uniqueness is probabilistic and not checked here.
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(format!("TCK-{}", hex[..12].to_uppercase()))
    }

    /// The ticket number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
