//! # Error Hierarchy
//!
//! Structured error types for the entire AeroLedger stack, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Every operation validates before it mutates, so a failure never leaves an
//! aggregate partially updated. Each variant carries the diagnostic context a
//! caller needs to decide between logging, alerting, and aborting; nothing is
//! retried or swallowed at this layer.

use thiserror::Error;

/// Top-level error type for domain operations.
#[derive(Error, Debug)]
pub enum DomainError {
    /// A domain invariant was breached: a naive clock reading, a blank
    /// identity, an unregistered action, an unauthorized role, or a
    /// cross-aggregate identity mismatch.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// A lifecycle move not permitted by the aggregate's state machine.
    #[error("illegal state transition: {from} -> {to}")]
    InvalidStateTransition {
        /// The current state name.
        from: String,
        /// The attempted target state name.
        to: String,
    },

    /// An operation was attempted against a flight that cannot accept it.
    #[error("flight unavailable: {0}")]
    FlightUnavailable(String),

    /// A seating or booking capacity limit was exceeded. Raised by
    /// collaborators that enforce overbooking limits on top of this core.
    #[error("capacity exceeded: {0}")]
    CapacityExceeded(String),

    /// Corruption detected while verifying an event chain.
    #[error("event chain integrity violated at index {index}: {reason}")]
    ChainIntegrity {
        /// Zero-based position of the first offending event.
        index: usize,
        /// What failed to line up.
        reason: String,
    },
}

/// Validation errors for identifier newtypes.
///
/// Identifiers enforce non-emptiness at construction time, so a blank value
/// can never circulate as an identity.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The identifier value is empty or whitespace-only.
    #[error("{kind} value must be non-empty")]
    EmptyIdentifier {
        /// The identifier type that rejected the input.
        kind: &'static str,
    },
}
