//! # Domain Failure Records
//!
//! Failed attempts are audit data too. A [`DomainFailure`] captures why a
//! command was rejected, when, and under whose authority, with structured
//! context for forensics. Like event records, failures are immutable once
//! recorded.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aero_core::{ClockReading, DomainError};

/// Immutable record of a failed domain attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainFailure {
    /// Why the attempt was rejected.
    pub reason: String,
    /// When the failure was recorded, from the injected clock.
    pub occurred_at: DateTime<Utc>,
    /// Identity of the actor whose attempt failed.
    pub authority: String,
    /// Structured context captured at the failure site.
    pub context: BTreeMap<String, serde_json::Value>,
}

impl DomainFailure {
    /// Record a failure, rejecting a blank reason.
    pub fn new(
        reason: impl Into<String>,
        occurred_at: DateTime<Utc>,
        authority: impl Into<String>,
        context: BTreeMap<String, serde_json::Value>,
    ) -> Result<Self, DomainError> {
        let reason = reason.into();
        if reason.is_empty() {
            return Err(DomainError::InvariantViolation(
                "Failure must have a reason".to_string(),
            ));
        }
        Ok(Self {
            reason,
            occurred_at,
            authority: authority.into(),
            context,
        })
    }

    /// Record a failure stamped from a clock reading.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvariantViolation`] on a naive reading or a blank
    /// reason.
    pub fn from_reading(
        reason: impl Into<String>,
        reading: ClockReading,
        authority: impl Into<String>,
        context: BTreeMap<String, serde_json::Value>,
    ) -> Result<Self, DomainError> {
        let occurred_at = reading.require_utc("Failure time")?;
        Self::new(reason, occurred_at, authority, context)
    }
}
