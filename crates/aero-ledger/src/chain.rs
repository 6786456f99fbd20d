//! # Chain Verification
//!
//! Two read-only verifiers over a stored stream. Neither repairs anything:
//! a failure is fatal corruption for the caller to handle, never something
//! to skip past.
//!
//! [`verify_event_chain`] checks linkage only — each record's
//! `previous_hash` must equal its predecessor's hash, starting from `None`.
//! [`verify_attestations`] additionally recomputes every hash from the
//! canonical payload bytes, catching payload edits that left the links
//! intact.

use aero_core::DomainError;

use crate::attestation::Attestation;
use crate::canonical::CanonicalBytes;
use crate::record::EventRecord;

/// Verify hash linkage across `events` in stored order.
///
/// # Errors
///
/// [`DomainError::ChainIntegrity`] at the first record whose
/// `previous_hash` does not continue the chain.
pub fn verify_event_chain(events: &[EventRecord]) -> Result<(), DomainError> {
    let mut running: Option<&str> = None;
    for (index, event) in events.iter().enumerate() {
        if event.attestation.previous_hash.as_deref() != running {
            return Err(DomainError::ChainIntegrity {
                index,
                reason: format!(
                    "previous_hash {:?} does not continue the chain from {:?}",
                    event.attestation.previous_hash.as_deref(),
                    running
                ),
            });
        }
        running = Some(&event.attestation.hash);
    }
    Ok(())
}

/// Verify linkage and recompute every attestation hash.
///
/// # Errors
///
/// [`DomainError::ChainIntegrity`] at the first record that breaks linkage
/// or whose stored hash does not match the recomputed digest of its
/// canonical payload bytes.
pub fn verify_attestations(events: &[EventRecord]) -> Result<(), DomainError> {
    verify_event_chain(events)?;

    for (index, event) in events.iter().enumerate() {
        let canonical =
            CanonicalBytes::new(&event.payload).map_err(|error| DomainError::ChainIntegrity {
                index,
                reason: format!("payload cannot be canonicalized: {error}"),
            })?;
        let expected =
            Attestation::compute(canonical.as_bytes(), event.attestation.previous_hash.as_deref());
        if expected.hash != event.attestation.hash {
            return Err(DomainError::ChainIntegrity {
                index,
                reason: "stored hash does not match recomputed payload digest".to_string(),
            });
        }
    }
    Ok(())
}
