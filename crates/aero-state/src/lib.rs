//! # aero-state — Aggregate Lifecycles
//!
//! The two aggregates and the machinery that keeps their lifecycles legal.
//! [`Ticket`] mutates only through its own methods along a strict chain;
//! [`Flight`] transforms as a value; the generic [`StateMachine`] rejects
//! implicit moves; and the booking rules hold the one cross-aggregate
//! invariant. Rehydration reads the ledger's event records; it writes
//! nothing back.

pub mod booking;
pub mod flight;
pub mod machine;
pub mod ticket;

pub use booking::{assert_flight_bookable, assert_ticket_issuable};
pub use flight::{Flight, FlightStatus};
pub use machine::StateMachine;
pub use ticket::{ticket_lifecycle, ReplayError, Ticket, TicketState};
