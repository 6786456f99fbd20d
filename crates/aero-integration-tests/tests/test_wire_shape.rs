//! # Persisted Event Shape
//!
//! The stored stream is the contract between the core and whatever persists
//! it: an `event_type` discriminator, inline domain fields, a
//! timezone-aware RFC 3339 `occurred_at`, a `version`, compliance verdicts,
//! and an `attestation{hash, previous_hash}`. A stream serialized to JSON
//! and read back must replay and verify bit-for-bit.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use aero_core::{FlightId, TicketNumber};
use aero_ledger::{verify_attestations, EventChainBuilder, EventPayload, EventRecord};
use aero_regulation::ComplianceResult;
use aero_state::{Ticket, TicketState};

fn instant(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

fn lifecycle_stream() -> Vec<EventRecord> {
    let number = TicketNumber::new("TCK-1").unwrap();
    let mut chain = EventChainBuilder::new("TCK-1");
    let t0 = instant("2026-03-01T08:00:00Z");

    let verdict = ComplianceResult {
        allowed: true,
        obligations: vec!["KEEP_RECORDS".to_string()],
        prohibitions: Vec::new(),
        regulation_id: "TEST-ALL".to_string(),
        law_version: "TEST-1".to_string(),
        evaluated_at: t0.timestamp(),
    };

    vec![
        chain
            .append(
                EventPayload::TicketIssued {
                    ticket_number: number.clone(),
                    flight_id: FlightId::new("FL-1").unwrap(),
                    passenger_id: "PAX-9".to_string(),
                },
                t0,
                vec![verdict],
            )
            .unwrap(),
        chain
            .append(
                EventPayload::TicketPaid {
                    ticket_number: number,
                },
                t0 + Duration::minutes(10),
                Vec::new(),
            )
            .unwrap(),
    ]
}

#[test]
fn a_stored_record_carries_every_contract_field() {
    let events = lifecycle_stream();
    let json = serde_json::to_value(&events[0]).unwrap();

    assert_eq!(json["payload"]["event_type"], "TicketIssued");
    assert_eq!(json["payload"]["ticket_number"], "TCK-1");
    assert_eq!(json["payload"]["flight_id"], "FL-1");
    assert_eq!(json["payload"]["passenger_id"], "PAX-9");
    assert_eq!(json["aggregate_id"], "TCK-1");
    assert_eq!(json["version"], 1);

    // Timezone-aware RFC 3339.
    let occurred_at = json["occurred_at"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(occurred_at).is_ok());

    // Attestation: sha256 hex, no predecessor on the first record.
    let hash = json["attestation"]["hash"].as_str().unwrap();
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(json["attestation"]["previous_hash"], Value::Null);

    assert_eq!(json["compliance"][0]["regulation_id"], "TEST-ALL");
    assert_eq!(json["compliance"][0]["allowed"], true);
}

#[test]
fn the_second_record_links_to_the_first_on_the_wire() {
    let events = lifecycle_stream();
    let first = serde_json::to_value(&events[0]).unwrap();
    let second = serde_json::to_value(&events[1]).unwrap();

    assert_eq!(second["version"], 2);
    assert_eq!(
        second["attestation"]["previous_hash"],
        first["attestation"]["hash"]
    );
}

#[test]
fn a_stream_round_trips_through_json_then_replays_and_verifies() {
    let events = lifecycle_stream();
    let json = serde_json::to_string(&events).unwrap();
    let back: Vec<EventRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, events);

    verify_attestations(&back).unwrap();
    let ticket = Ticket::rehydrate(&back).unwrap();
    assert_eq!(ticket.state(), TicketState::Paid);
    assert_eq!(ticket.version(), 2);
    assert_eq!(ticket.issued_at(), events[0].occurred_at);
}

#[test]
fn an_unknown_event_type_on_the_wire_is_rejected() {
    let mut json = serde_json::to_value(&lifecycle_stream()[1]).unwrap();
    json["payload"]["event_type"] = Value::String("TicketUpgraded".to_string());
    assert!(serde_json::from_value::<EventRecord>(json).is_err());
}

#[test]
fn a_hand_edited_version_still_fails_replay_after_the_round_trip() {
    let events = lifecycle_stream();
    let mut json = serde_json::to_value(&events).unwrap();
    json[1]["version"] = Value::from(7);

    let back: Vec<EventRecord> = serde_json::from_value(json).unwrap();
    assert!(Ticket::rehydrate(&back).is_err());
}
