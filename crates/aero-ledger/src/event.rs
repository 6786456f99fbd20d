//! # Event Vocabulary
//!
//! The closed set of domain events a stream can carry. The union is tagged
//! on the wire by an `event_type` field holding the variant name, and every
//! consumer matches it exhaustively — there is no runtime type-name
//! dispatch, and an unknown kind cannot be constructed.

use std::fmt;

use serde::{Deserialize, Serialize};

use aero_core::{FlightId, TicketNumber};
use aero_regulation::DeniedBoardingReason;

/// Cause of an irregular-operations declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrropsCause {
    /// Weather below operating minima.
    Weather,
    /// Aircraft technical fault.
    Technical,
    /// Crew unavailability or duty-time limits.
    Crew,
    /// Air traffic control restriction.
    AirTrafficControl,
    /// Security incident.
    Security,
    /// Airport infrastructure problem.
    Airport,
    /// Cause not yet determined.
    Unknown,
}

impl IrropsCause {
    /// Stable lowercase name, matching the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Technical => "technical",
            Self::Crew => "crew",
            Self::AirTrafficControl => "air_traffic_control",
            Self::Security => "security",
            Self::Airport => "airport",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for IrropsCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grounds on which a recorded decision was overridden by a human authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideReason {
    /// The captain exercised final authority over the aircraft.
    CaptainDecision,
    /// A gate agent resolved a boarding dispute.
    GateAgentDecision,
    /// Operations control redirected the operation.
    OperationsControl,
    /// A safety exception was invoked.
    SafetyException,
    /// An automated decision was wrong and had to be reversed.
    SystemFailure,
}

impl OverrideReason {
    /// Stable lowercase name, matching the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CaptainDecision => "captain_decision",
            Self::GateAgentDecision => "gate_agent_decision",
            Self::OperationsControl => "operations_control",
            Self::SafetyException => "safety_exception",
            Self::SystemFailure => "system_failure",
        }
    }
}

impl fmt::Display for OverrideReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of domain event payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum EventPayload {
    /// A ticket came into existence against a flight.
    TicketIssued {
        /// The new ticket's number.
        ticket_number: TicketNumber,
        /// The flight the ticket is issued against.
        flight_id: FlightId,
        /// The passenger the ticket belongs to.
        passenger_id: String,
    },
    /// Payment completed for a ticket.
    TicketPaid {
        /// The paid ticket.
        ticket_number: TicketNumber,
    },
    /// A passenger checked in.
    TicketCheckedIn {
        /// The checked-in ticket.
        ticket_number: TicketNumber,
    },
    /// A passenger boarded the aircraft.
    TicketBoarded {
        /// The boarded ticket.
        ticket_number: TicketNumber,
    },
    /// A ticket reached the end of its life after the flight completed.
    TicketClosed {
        /// The closed ticket.
        ticket_number: TicketNumber,
    },
    /// A flight's schedule slipped.
    FlightDelayed {
        /// The delayed flight.
        flight_id: FlightId,
        /// Minutes both scheduled times moved by.
        delay_minutes: i64,
    },
    /// A flight was cancelled outright.
    FlightCancelled {
        /// The cancelled flight.
        flight_id: FlightId,
        /// Free-text cancellation reason, when one was given.
        reason: Option<String>,
    },
    /// A gate agent refused boarding to a ticketed passenger.
    BoardingDenied {
        /// The affected ticket.
        ticket_number: TicketNumber,
        /// The flight boarding was denied for.
        flight_id: FlightId,
        /// Why boarding was denied.
        reason: DeniedBoardingReason,
        /// Actor who made the call.
        decided_by: String,
        /// Optional free-text notes.
        notes: Option<String>,
    },
    /// Compensation was granted under a named regulation.
    CompensationGranted {
        /// The compensated ticket.
        ticket_number: TicketNumber,
        /// Amount granted, in whole currency units.
        amount: u32,
        /// ISO 4217 currency code.
        currency: String,
        /// The regulation the grant was made under.
        regulation: String,
    },
    /// Irregular operations were declared for a flight.
    IrropsDeclared {
        /// The disrupted flight.
        flight_id: FlightId,
        /// What disrupted it.
        cause: IrropsCause,
        /// Actor who declared the disruption.
        declared_by: String,
        /// External reference (METAR, MEL item, ATC notice), when available.
        reference: Option<String>,
    },
    /// A previously declared irregular-operations condition was lifted.
    IrropsCleared {
        /// The recovered flight.
        flight_id: FlightId,
        /// Actor who cleared the disruption.
        cleared_by: String,
    },
    /// A human authority overrode a recorded decision.
    SystemOverride {
        /// `event_type` of the record being overridden.
        overridden_event: String,
        /// Grounds for the override.
        reason: OverrideReason,
        /// Actor who authorized it.
        authorized_by: String,
        /// Why the override was necessary.
        justification: String,
    },
    /// An operational action exceeded its standard-operating-procedure window.
    SopViolationDetected {
        /// The affected flight.
        flight_id: FlightId,
        /// The governed action, e.g. `boarding_close`.
        action: String,
        /// Observed delay in minutes.
        actual_delay_minutes: i64,
        /// The expectation's ceiling in minutes.
        expected_max_minutes: i64,
    },
}

impl EventPayload {
    /// The wire discriminator for this event kind.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::TicketIssued { .. } => "TicketIssued",
            Self::TicketPaid { .. } => "TicketPaid",
            Self::TicketCheckedIn { .. } => "TicketCheckedIn",
            Self::TicketBoarded { .. } => "TicketBoarded",
            Self::TicketClosed { .. } => "TicketClosed",
            Self::FlightDelayed { .. } => "FlightDelayed",
            Self::FlightCancelled { .. } => "FlightCancelled",
            Self::BoardingDenied { .. } => "BoardingDenied",
            Self::CompensationGranted { .. } => "CompensationGranted",
            Self::IrropsDeclared { .. } => "IrropsDeclared",
            Self::IrropsCleared { .. } => "IrropsCleared",
            Self::SystemOverride { .. } => "SystemOverride",
            Self::SopViolationDetected { .. } => "SopViolationDetected",
        }
    }
}
