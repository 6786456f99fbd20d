//! # Ticket Aggregate
//!
//! A ticket is a legal contract between passenger and airline. Its lifecycle
//! is a strict total order with no cycles and no back-edges:
//!
//! ```text
//! ISSUED -> PAID -> CHECKED_IN -> BOARDED -> CLOSED
//! ```
//!
//! The aggregate is mutated only through its own methods, each of which
//! validates before it writes (state machine first, then the clock reading),
//! so a failed call leaves the ticket exactly as it was. Tickets are never
//! deleted; `CLOSED` is terminal.
//!
//! [`Ticket::rehydrate`] reconstructs a ticket purely by replaying its event
//! stream. Replay trusts the log — it does not re-run business rules — but
//! it insists on a contiguous version sequence and a ticket-shaped stream,
//! failing fast on anything else.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use aero_core::{Clock, DomainError, FlightId, TicketNumber};
use aero_ledger::{EventPayload, EventRecord};

use crate::machine::StateMachine;

/// Lifecycle states of a [`Ticket`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketState {
    /// The ticket exists but has not been paid for.
    Issued,
    /// Payment completed.
    Paid,
    /// The passenger checked in.
    CheckedIn,
    /// The passenger boarded the aircraft.
    Boarded,
    /// The lifecycle ended after the flight completed. Terminal.
    Closed,
}

impl TicketState {
    /// Every state, in lifecycle order.
    pub const ALL: [TicketState; 5] = [
        Self::Issued,
        Self::Paid,
        Self::CheckedIn,
        Self::Boarded,
        Self::Closed,
    ];

    /// Stable uppercase name, matching the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Issued => "ISSUED",
            Self::Paid => "PAID",
            Self::CheckedIn => "CHECKED_IN",
            Self::Boarded => "BOARDED",
            Self::Closed => "CLOSED",
        }
    }

    /// Whether no further transition leaves this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for TicketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ticket lifecycle table, constructed once and shared.
pub fn ticket_lifecycle() -> &'static StateMachine<TicketState> {
    static LIFECYCLE: OnceLock<StateMachine<TicketState>> = OnceLock::new();
    LIFECYCLE.get_or_init(|| {
        StateMachine::new([
            (TicketState::Issued, vec![TicketState::Paid]),
            (TicketState::Paid, vec![TicketState::CheckedIn]),
            (TicketState::CheckedIn, vec![TicketState::Boarded]),
            (TicketState::Boarded, vec![TicketState::Closed]),
            (TicketState::Closed, vec![]),
        ])
    })
}

/// Errors while rehydrating a [`Ticket`] from its event stream.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// The stream was empty.
    #[error("cannot rehydrate Ticket without events")]
    EmptyStream,

    /// An event's version did not continue the running sequence.
    #[error("version mismatch: expected {expected}, got {found}")]
    VersionMismatch {
        /// The version the sequence requires next.
        expected: u64,
        /// The version the record actually carries.
        found: u64,
    },

    /// An event kind that cannot apply to a ticket stream, including an
    /// issuance anywhere but first.
    #[error("event {event_type} cannot apply to a ticket stream")]
    UnexpectedEvent {
        /// The offending record's wire discriminator.
        event_type: String,
    },
}

/// The ticket aggregate.
///
/// Fields are private: the lifecycle methods are the only mutation path, so
/// the state-machine and clock invariants hold structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    ticket_number: TicketNumber,
    flight_id: FlightId,
    passenger_id: String,
    state: TicketState,
    issued_at: DateTime<Utc>,
    last_state_change_at: DateTime<Utc>,
    version: u64,
}

impl Ticket {
    /// Issue a new ticket against a flight.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvariantViolation`] on a naive clock reading or a
    /// blank passenger identity.
    pub fn issue(
        ticket_number: TicketNumber,
        flight_id: FlightId,
        passenger_id: impl Into<String>,
        clock: &dyn Clock,
    ) -> Result<Self, DomainError> {
        let now = clock.now().require_utc("Ticket issue time")?;

        let passenger_id = passenger_id.into();
        if passenger_id.trim().is_empty() {
            return Err(DomainError::InvariantViolation(
                "Passenger identity must be provided".to_string(),
            ));
        }

        Ok(Self {
            ticket_number,
            flight_id,
            passenger_id,
            state: TicketState::Issued,
            issued_at: now,
            last_state_change_at: now,
            version: 1,
        })
    }

    /// Move to `PAID`.
    pub fn mark_paid(&mut self, clock: &dyn Clock) -> Result<(), DomainError> {
        self.transition(TicketState::Paid, clock)
    }

    /// Move to `CHECKED_IN`.
    pub fn check_in(&mut self, clock: &dyn Clock) -> Result<(), DomainError> {
        self.transition(TicketState::CheckedIn, clock)
    }

    /// Move to `BOARDED`.
    pub fn board(&mut self, clock: &dyn Clock) -> Result<(), DomainError> {
        self.transition(TicketState::Boarded, clock)
    }

    /// Move to `CLOSED`, ending the lifecycle.
    pub fn close(&mut self, clock: &dyn Clock) -> Result<(), DomainError> {
        self.transition(TicketState::Closed, clock)
    }

    // Checks run before any field is written, so a failure leaves the
    // aggregate untouched.
    fn transition(&mut self, to: TicketState, clock: &dyn Clock) -> Result<(), DomainError> {
        ticket_lifecycle().assert_transition(self.state, to)?;
        let now = clock.now().require_utc("State transition time")?;

        self.state = to;
        self.last_state_change_at = now;
        self.version += 1;
        Ok(())
    }

    /// Reconstruct a ticket by replaying its ordered event stream.
    ///
    /// The first event must be the issuance carrying version 1; every later
    /// event must carry the running version plus one. Replay applies states
    /// directly from the log without re-running business rules. A failure
    /// returns no partial aggregate.
    ///
    /// # Errors
    ///
    /// [`ReplayError::EmptyStream`] on an empty list,
    /// [`ReplayError::VersionMismatch`] on a gap or repeat in the version
    /// sequence, [`ReplayError::UnexpectedEvent`] on any kind a ticket
    /// stream cannot carry — including a second issuance.
    pub fn rehydrate(events: &[EventRecord]) -> Result<Self, ReplayError> {
        let (first, rest) = events.split_first().ok_or(ReplayError::EmptyStream)?;
        if first.version != 1 {
            return Err(ReplayError::VersionMismatch {
                expected: 1,
                found: first.version,
            });
        }

        let mut ticket = match &first.payload {
            EventPayload::TicketIssued {
                ticket_number,
                flight_id,
                passenger_id,
            } => Self {
                ticket_number: ticket_number.clone(),
                flight_id: flight_id.clone(),
                passenger_id: passenger_id.clone(),
                state: TicketState::Issued,
                issued_at: first.occurred_at,
                last_state_change_at: first.occurred_at,
                version: 1,
            },
            other => {
                return Err(ReplayError::UnexpectedEvent {
                    event_type: other.event_type().to_string(),
                })
            }
        };

        for event in rest {
            if event.version != ticket.version + 1 {
                return Err(ReplayError::VersionMismatch {
                    expected: ticket.version + 1,
                    found: event.version,
                });
            }

            let state = match &event.payload {
                EventPayload::TicketPaid { .. } => TicketState::Paid,
                EventPayload::TicketCheckedIn { .. } => TicketState::CheckedIn,
                EventPayload::TicketBoarded { .. } => TicketState::Boarded,
                EventPayload::TicketClosed { .. } => TicketState::Closed,
                other => {
                    return Err(ReplayError::UnexpectedEvent {
                        event_type: other.event_type().to_string(),
                    })
                }
            };

            ticket.state = state;
            ticket.last_state_change_at = event.occurred_at;
            ticket.version = event.version;
        }

        Ok(ticket)
    }

    /// The ticket's number.
    pub fn ticket_number(&self) -> &TicketNumber {
        &self.ticket_number
    }

    /// The flight the ticket is issued against.
    pub fn flight_id(&self) -> &FlightId {
        &self.flight_id
    }

    /// The passenger the ticket belongs to.
    pub fn passenger_id(&self) -> &str {
        &self.passenger_id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TicketState {
        self.state
    }

    /// When the ticket was issued.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// When the state last changed.
    pub fn last_state_change_at(&self) -> DateTime<Utc> {
        self.last_state_change_at
    }

    /// Number of state changes applied, issuance included. Callers use this
    /// for optimistic checks before persisting.
    pub fn version(&self) -> u64 {
        self.version
    }
}
