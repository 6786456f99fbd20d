//! # Lifecycle Commands
//!
//! Typed statements of intent, one per lifecycle operation. A command
//! carries only the identity of what it targets plus the data the operation
//! needs; who may execute it is the permission table's decision, and whether
//! it is legal right now is the aggregate's.

use serde::{Deserialize, Serialize};

use aero_core::{FlightId, TicketNumber};

/// Intent to issue a new ticket against a flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTicket {
    /// Number the new ticket will carry.
    pub ticket_number: TicketNumber,
    /// The flight the ticket is issued against.
    pub flight_id: FlightId,
    /// The passenger the ticket belongs to.
    pub passenger_id: String,
}

/// Intent to pay for a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTicket {
    /// The ticket being paid for.
    pub ticket_number: TicketNumber,
}

/// Intent to check in for a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInTicket {
    /// The ticket being checked in.
    pub ticket_number: TicketNumber,
}

/// Intent to board a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardTicket {
    /// The ticket being boarded.
    pub ticket_number: TicketNumber,
}

/// Intent to close a ticket after boarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseTicket {
    /// The ticket being closed.
    pub ticket_number: TicketNumber,
}
