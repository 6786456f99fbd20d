//! # Event Records and Chain Building
//!
//! An [`EventRecord`] is one immutable entry in an aggregate's append-only
//! stream: the event itself, when it occurred, any compliance verdicts
//! attached at decision time, and the attestation anchoring it to its
//! predecessor. Records are created once, through an [`EventChainBuilder`],
//! and never revised; history is only ever read back by replay.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use aero_regulation::ComplianceResult;

use crate::attestation::Attestation;
use crate::canonical::{CanonicalBytes, CanonicalError};
use crate::event::EventPayload;

/// An append-only record of one domain event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique identifier of this record.
    pub event_id: Uuid,
    /// Identity of the aggregate whose stream this record belongs to.
    pub aggregate_id: String,
    /// 1-based position of this record in its aggregate's stream.
    pub version: u64,
    /// The domain event. Serialization embeds the `event_type` discriminator.
    pub payload: EventPayload,
    /// When the event occurred, from the injected clock.
    pub occurred_at: DateTime<Utc>,
    /// Verdicts attached by the regulation engine, in evaluation order.
    pub compliance: Vec<ComplianceResult>,
    /// Hash-chain anchor for tamper evidence.
    pub attestation: Attestation,
}

impl EventRecord {
    /// The wire discriminator of the carried event.
    pub fn event_type(&self) -> &'static str {
        self.payload.event_type()
    }
}

/// Builds one aggregate's hash-linked stream in append order.
///
/// Tracks the running previous hash and the next version number. One
/// builder per stream; callers enforce single-writer discipline.
#[derive(Debug, Clone)]
pub struct EventChainBuilder {
    aggregate_id: String,
    previous_hash: Option<String>,
    next_version: u64,
}

impl EventChainBuilder {
    /// Start a fresh stream for an aggregate.
    pub fn new(aggregate_id: impl Into<String>) -> Self {
        Self {
            aggregate_id: aggregate_id.into(),
            previous_hash: None,
            next_version: 1,
        }
    }

    /// Resume a stream from its last persisted record.
    pub fn resume(
        aggregate_id: impl Into<String>,
        last_hash: Option<String>,
        last_version: u64,
    ) -> Self {
        Self {
            aggregate_id: aggregate_id.into(),
            previous_hash: last_hash,
            next_version: last_version + 1,
        }
    }

    /// Append one event, producing its attested record.
    pub fn append(
        &mut self,
        payload: EventPayload,
        occurred_at: DateTime<Utc>,
        compliance: Vec<ComplianceResult>,
    ) -> Result<EventRecord, CanonicalError> {
        let canonical = CanonicalBytes::new(&payload)?;
        let attestation = Attestation::compute(canonical.as_bytes(), self.previous_hash.as_deref());

        let record = EventRecord {
            event_id: Uuid::new_v4(),
            aggregate_id: self.aggregate_id.clone(),
            version: self.next_version,
            payload,
            occurred_at,
            compliance,
            attestation,
        };

        self.previous_hash = Some(record.attestation.hash.clone());
        self.next_version += 1;
        Ok(record)
    }

    /// The aggregate this builder appends for.
    pub fn aggregate_id(&self) -> &str {
        &self.aggregate_id
    }

    /// Hash of the most recently appended record, if any.
    pub fn previous_hash(&self) -> Option<&str> {
        self.previous_hash.as_deref()
    }

    /// Version the next appended record will carry.
    pub fn next_version(&self) -> u64 {
        self.next_version
    }
}
