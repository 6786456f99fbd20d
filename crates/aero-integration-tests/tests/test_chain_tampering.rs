//! # Adversarial Tampering Against a Committed Stream
//!
//! Builds a real three-event stream through the services, then edits it the
//! way an attacker with storage access would: relinking, payload rewrites,
//! deletion, reordering, and appending a forged record. Every edit must be
//! detected at the exact offending index, and verification must never
//! repair anything.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use aero_command::{
    CheckInService, CheckInTicket, IssueTicket, IssueTicketService, MemoryEventSink, PayTicket,
    PayTicketService,
};
use aero_core::{
    Authority, AuthorityRole, Clock, DomainError, FixedClock, FlightId, PermissionTable,
    TicketNumber,
};
use aero_ledger::{verify_attestations, verify_event_chain, EventPayload, EventRecord};
use aero_regulation::RegulationContext;
use aero_state::Flight;

fn instant(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

/// Issue, pay, and check in one ticket; return the committed stream.
fn committed_stream() -> Vec<EventRecord> {
    let permissions = Arc::new(PermissionTable::standard());
    let sink = Arc::new(MemoryEventSink::new());
    let number = TicketNumber::new("TCK-1").unwrap();
    let context = RegulationContext::new();
    let mut chain = aero_ledger::EventChainBuilder::new(number.as_str());
    let t0 = instant("2026-03-01T08:00:00Z");

    let clock_at = |at: DateTime<Utc>| -> Arc<dyn Clock> { Arc::new(FixedClock::at(at)) };

    let flight = Flight::schedule(
        FlightId::new("FL-1").unwrap(),
        "AMS",
        "JFK",
        t0 + Duration::hours(4),
        t0 + Duration::hours(12),
        "PH-AKA",
    );

    let (mut ticket, _) =
        IssueTicketService::new(clock_at(t0), permissions.clone(), None, sink.clone())
            .execute(
                &IssueTicket {
                    ticket_number: number.clone(),
                    flight_id: FlightId::new("FL-1").unwrap(),
                    passenger_id: "PAX-9".to_string(),
                },
                &flight,
                &Authority::new("ops-core", AuthorityRole::System).unwrap(),
                &context,
                &mut chain,
            )
            .unwrap();

    PayTicketService::new(
        clock_at(t0 + Duration::minutes(5)),
        permissions.clone(),
        None,
        sink.clone(),
    )
    .execute(
        &mut ticket,
        &PayTicket {
            ticket_number: number.clone(),
        },
        &Authority::new("PAX-9", AuthorityRole::Passenger).unwrap(),
        &context,
        &mut chain,
    )
    .unwrap();

    CheckInService::new(
        clock_at(t0 + Duration::hours(2)),
        permissions,
        None,
        sink.clone(),
    )
    .execute(
        &mut ticket,
        &CheckInTicket {
            ticket_number: number,
        },
        &Authority::new("desk-12", AuthorityRole::CheckinAgent).unwrap(),
        &context,
        &mut chain,
    )
    .unwrap();

    sink.events()
}

fn chain_failure_index(err: DomainError) -> usize {
    match err {
        DomainError::ChainIntegrity { index, .. } => index,
        other => panic!("expected a chain-integrity failure, got: {other}"),
    }
}

// =========================================================================
// Link tampering
// =========================================================================

#[test]
fn the_untouched_stream_verifies() {
    let events = committed_stream();
    assert_eq!(events.len(), 3);
    verify_event_chain(&events).unwrap();
    verify_attestations(&events).unwrap();
}

#[test]
fn relinking_the_second_event_fails_exactly_there() {
    let mut events = committed_stream();
    events[1].attestation.previous_hash = Some("a".repeat(64));

    assert_eq!(chain_failure_index(verify_event_chain(&events).unwrap_err()), 1);
    // The later, still-intact link must not mask the earlier break.
    assert_eq!(chain_failure_index(verify_attestations(&events).unwrap_err()), 1);
}

#[test]
fn detaching_the_first_event_fails_at_index_zero() {
    let mut events = committed_stream();
    events[0].attestation.previous_hash = Some("b".repeat(64));
    assert_eq!(chain_failure_index(verify_event_chain(&events).unwrap_err()), 0);
}

// =========================================================================
// Retroactive edits, deletion, reordering
// =========================================================================

#[test]
fn rewriting_a_payload_is_caught_by_recomputation() {
    let mut events = committed_stream();
    // The links are untouched; only the history is rewritten.
    events[1].payload = EventPayload::TicketBoarded {
        ticket_number: TicketNumber::new("TCK-1").unwrap(),
    };

    verify_event_chain(&events).unwrap();
    assert_eq!(chain_failure_index(verify_attestations(&events).unwrap_err()), 1);
}

#[test]
fn deleting_the_middle_event_breaks_the_chain_at_the_gap() {
    let mut events = committed_stream();
    events.remove(1);
    assert_eq!(chain_failure_index(verify_event_chain(&events).unwrap_err()), 1);
}

#[test]
fn swapping_two_events_breaks_the_chain() {
    let mut events = committed_stream();
    events.swap(1, 2);
    assert!(verify_event_chain(&events).is_err());
}

#[test]
fn truncating_the_tail_is_not_detectable_by_linkage_alone() {
    // Dropping a suffix leaves a valid shorter chain; detecting truncation
    // needs an out-of-band head pointer, which is the sink's concern.
    let events = committed_stream();
    verify_event_chain(&events[..2]).unwrap();
    verify_attestations(&events[..2]).unwrap();
}

#[test]
fn a_forged_appended_record_must_present_the_running_hash() {
    let events = committed_stream();

    let mut forged = events.clone();
    let mut extra = events[2].clone();
    extra.version = 4;
    extra.attestation.previous_hash = Some("c".repeat(64));
    forged.push(extra);

    assert_eq!(chain_failure_index(verify_event_chain(&forged).unwrap_err()), 3);
}
