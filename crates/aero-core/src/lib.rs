#![deny(missing_docs)]

//! # aero-core — Foundational Types for the AeroLedger Stack
//!
//! This crate defines the foundational types that every other crate in the
//! workspace depends on. It has no internal crate dependencies — only `serde`,
//! `thiserror`, `chrono`, and `uuid` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** Every identifier is a distinct
//!    type. You cannot pass a [`FlightId`] where a [`TicketNumber`] is expected,
//!    and neither can be constructed from a blank string.
//!
//! 2. **Time is a capability.** Domain code never reads the wall clock; it takes
//!    a [`Clock`] and validates every reading through
//!    [`ClockReading::require_utc`]. Naive timestamps are rejected, not guessed.
//!
//! 3. **Fail-closed authorization.** The [`PermissionTable`] treats unknown
//!    actions as denial. A typo can refuse service; it can never grant it.
//!
//! 4. **[`DomainError`] hierarchy.** Structured errors with `thiserror` — no
//!    `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod authority;
pub mod clock;
pub mod error;
pub mod identity;
pub mod permission;

// Re-export primary types at crate root for ergonomic imports.
pub use authority::{Authority, AuthorityRole};
pub use clock::{Clock, ClockReading, FixedClock, SystemClock};
pub use error::{DomainError, ValidationError};
pub use identity::{FlightId, TicketNumber};
pub use permission::{actions, PermissionTable};
