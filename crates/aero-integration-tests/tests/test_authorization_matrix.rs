//! # The Authorization Matrix, Fail-Closed
//!
//! Every role against every registered action, and the fail-closed edges:
//! unknown actions, empty role sets, and the services refusing to touch an
//! aggregate under the wrong authority.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use aero_command::{IssueTicket, IssueTicketService, MemoryEventSink, PayTicket, PayTicketService};
use aero_core::{
    actions, Authority, AuthorityRole, Clock, DomainError, FixedClock, FlightId, PermissionTable,
    TicketNumber,
};
use aero_ledger::EventChainBuilder;
use aero_regulation::RegulationContext;
use aero_state::{Flight, Ticket, TicketState};

const ALL_ROLES: [AuthorityRole; 8] = [
    AuthorityRole::System,
    AuthorityRole::Passenger,
    AuthorityRole::CheckinAgent,
    AuthorityRole::GateAgent,
    AuthorityRole::FlightOps,
    AuthorityRole::Captain,
    AuthorityRole::Security,
    AuthorityRole::Finance,
];

fn authority(role: AuthorityRole) -> Authority {
    Authority::new("actor-1", role).unwrap()
}

#[test]
fn the_standard_table_permits_exactly_the_documented_pairs() {
    let table = PermissionTable::standard();
    let expected: [(&str, &[AuthorityRole]); 6] = [
        (actions::ISSUE_TICKET, &[AuthorityRole::System]),
        (
            actions::PAY_TICKET,
            &[AuthorityRole::Passenger, AuthorityRole::Finance],
        ),
        (actions::CHECK_IN, &[AuthorityRole::CheckinAgent]),
        (actions::BOARD, &[AuthorityRole::GateAgent]),
        (actions::CLOSE_TICKET, &[AuthorityRole::System]),
        (
            actions::OVERRIDE_BOARDING,
            &[AuthorityRole::Captain, AuthorityRole::Security],
        ),
    ];

    for (action, permitted) in expected {
        for role in ALL_ROLES {
            let outcome = table.assert_authorized(action, &authority(role));
            if permitted.contains(&role) {
                outcome.unwrap_or_else(|e| panic!("{role} must perform {action}: {e}"));
            } else {
                assert!(outcome.is_err(), "{role} must not perform {action}");
            }
        }
    }
}

#[test]
fn unknown_actions_are_denied_for_every_role() {
    let table = PermissionTable::standard();
    for role in ALL_ROLES {
        let err = table
            .assert_authorized("ISSUE_TICKTE", &authority(role))
            .unwrap_err();
        assert!(format!("{err}").contains("not registered"));
    }
}

#[test]
fn an_action_with_no_roles_grants_nothing() {
    let table = PermissionTable::new([("GROUND_HOLD", Vec::<AuthorityRole>::new())]);
    for role in ALL_ROLES {
        assert!(table.assert_authorized("GROUND_HOLD", &authority(role)).is_err());
    }
}

// =========================================================================
// Enforcement at the service boundary
// =========================================================================

fn instant(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

fn flight() -> Flight {
    Flight::schedule(
        FlightId::new("FL-1").unwrap(),
        "AMS",
        "JFK",
        instant("2026-03-01T12:00:00Z"),
        instant("2026-03-01T20:00:00Z"),
        "PH-AKA",
    )
}

#[test]
fn only_system_reaches_the_issue_aggregate() {
    let at = instant("2026-03-01T08:00:00Z");
    let sink = Arc::new(MemoryEventSink::new());
    let service = IssueTicketService::new(
        Arc::new(FixedClock::at(at)) as Arc<dyn Clock>,
        Arc::new(PermissionTable::standard()),
        None,
        sink.clone(),
    );
    let command = IssueTicket {
        ticket_number: TicketNumber::new("TCK-1").unwrap(),
        flight_id: FlightId::new("FL-1").unwrap(),
        passenger_id: "PAX-9".to_string(),
    };

    for role in ALL_ROLES {
        let mut chain = EventChainBuilder::new("TCK-1");
        let outcome = service.execute(
            &command,
            &flight(),
            &authority(role),
            &RegulationContext::new(),
            &mut chain,
        );
        assert_eq!(outcome.is_ok(), role == AuthorityRole::System, "role {role}");
    }

    // One committed event; seven denials on the failure channel.
    assert_eq!(sink.events().len(), 1);
    assert_eq!(sink.failures().len(), 7);
    assert!(sink
        .failures()
        .iter()
        .all(|f| f.reason.contains("not permitted")));
}

#[test]
fn denial_happens_before_the_aggregate_is_touched() {
    let at = instant("2026-03-01T08:00:00Z");
    let clock = FixedClock::at(at);
    let sink = Arc::new(MemoryEventSink::new());
    let service = PayTicketService::new(
        Arc::new(clock) as Arc<dyn Clock>,
        Arc::new(PermissionTable::standard()),
        None,
        sink,
    );

    let mut ticket = Ticket::issue(
        TicketNumber::new("TCK-1").unwrap(),
        FlightId::new("FL-1").unwrap(),
        "PAX-9",
        &clock,
    )
    .unwrap();
    let mut chain = EventChainBuilder::new("TCK-1");

    let err = service
        .execute(
            &mut ticket,
            &PayTicket {
                ticket_number: TicketNumber::new("TCK-1").unwrap(),
            },
            &authority(AuthorityRole::GateAgent),
            &RegulationContext::new(),
            &mut chain,
        )
        .unwrap_err();

    assert!(matches!(err, DomainError::InvariantViolation(_)));
    assert_eq!(ticket.state(), TicketState::Issued);
    assert_eq!(ticket.version(), 1);
    assert_eq!(chain.next_version(), 1);
}
