//! # aero-ledger — Tamper-Evident Event Ledger
//!
//! Append-only [`EventRecord`]s with hash-chained [`Attestation`]s over
//! canonical payload bytes. The ledger records what happened; it never
//! decides what may happen — aggregates and services sit in the crates
//! above, storage behind the event-sink port beside them.

pub mod attestation;
pub mod canonical;
pub mod chain;
pub mod event;
pub mod failure;
pub mod record;

pub use attestation::Attestation;
pub use canonical::{CanonicalBytes, CanonicalError};
pub use chain::{verify_attestations, verify_event_chain};
pub use event::{EventPayload, IrropsCause, OverrideReason};
pub use failure::DomainFailure;
pub use record::{EventChainBuilder, EventRecord};
