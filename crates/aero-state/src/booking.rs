//! # Booking Rules
//!
//! Cross-aggregate invariants between [`Ticket`] and [`Flight`]. Identity is
//! checked before bookability: a ticket for the wrong flight is an invariant
//! breach regardless of the flight's status.

use aero_core::DomainError;

use crate::flight::{Flight, FlightStatus};
use crate::ticket::Ticket;

/// Reject the flight unless it can accept ticketing.
///
/// # Errors
///
/// [`DomainError::FlightUnavailable`] iff the flight is cancelled.
pub fn assert_flight_bookable(flight: &Flight) -> Result<(), DomainError> {
    if flight.status == FlightStatus::Cancelled {
        return Err(DomainError::FlightUnavailable(
            "Cannot issue tickets for a cancelled flight".to_string(),
        ));
    }
    Ok(())
}

/// A ticket may only exist if it names this flight and the flight is
/// bookable.
///
/// # Errors
///
/// [`DomainError::InvariantViolation`] when the ticket names a different
/// flight, then [`DomainError::FlightUnavailable`] from
/// [`assert_flight_bookable`].
pub fn assert_ticket_issuable(ticket: &Ticket, flight: &Flight) -> Result<(), DomainError> {
    if ticket.flight_id() != &flight.flight_id {
        return Err(DomainError::InvariantViolation(
            "Ticket flight_id does not match Flight identity".to_string(),
        ));
    }

    assert_flight_bookable(flight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aero_core::{FixedClock, FlightId, TicketNumber};
    use chrono::{DateTime, Utc};

    fn instant() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn flight(id: &str) -> Flight {
        Flight::schedule(
            FlightId::new(id).unwrap(),
            "AMS",
            "JFK",
            instant(),
            instant() + chrono::Duration::hours(8),
            "PH-AKA",
        )
    }

    fn ticket(flight_id: &str) -> Ticket {
        Ticket::issue(
            TicketNumber::new("TCK-1").unwrap(),
            FlightId::new(flight_id).unwrap(),
            "PAX-9",
            &FixedClock::at(instant()),
        )
        .unwrap()
    }

    #[test]
    fn a_scheduled_flight_is_bookable() {
        assert!(assert_flight_bookable(&flight("FL-1")).is_ok());
        assert!(assert_ticket_issuable(&ticket("FL-1"), &flight("FL-1")).is_ok());
    }

    #[test]
    fn a_cancelled_flight_is_not_bookable() {
        let err = assert_flight_bookable(&flight("FL-1").cancel()).unwrap_err();
        assert_eq!(
            format!("{err}"),
            "flight unavailable: Cannot issue tickets for a cancelled flight"
        );
    }

    #[test]
    fn a_delayed_flight_is_still_bookable() {
        assert!(assert_flight_bookable(&flight("FL-1").delay(240)).is_ok());
    }

    #[test]
    fn identity_mismatch_is_checked_before_bookability() {
        let err = assert_ticket_issuable(&ticket("FL-2"), &flight("FL-1").cancel()).unwrap_err();
        assert_eq!(
            format!("{err}"),
            "invariant violation: Ticket flight_id does not match Flight identity"
        );
    }

    #[test]
    fn matching_ticket_against_a_cancelled_flight_is_unavailable() {
        let err = assert_ticket_issuable(&ticket("FL-1"), &flight("FL-1").cancel()).unwrap_err();
        assert!(matches!(err, DomainError::FlightUnavailable(_)));
    }
}
