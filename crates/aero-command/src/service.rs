//! # Command Services
//!
//! One orchestrating service per command. Every service runs the same
//! sequence: authorize the acting authority against the permission table,
//! invoke the aggregate operation under the injected clock, evaluate the
//! regulation engine when one is wired, append the event to the aggregate's
//! hash chain, and hand the record to the sink. Checks run before the
//! aggregate mutates, so a rejected command changes nothing.
//!
//! Rejected attempts are audit data: each service records a
//! [`DomainFailure`] to the sink before surfacing the error. A naive clock
//! reading cannot stamp a valid failure record, so on that path the record
//! is skipped with a trace note and the original error still propagates.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use aero_core::{actions, Authority, Clock, DomainError, PermissionTable, TicketNumber};
use aero_ledger::{DomainFailure, EventChainBuilder, EventPayload, EventRecord};
use aero_regulation::{ComplianceResult, RegulationContext, RegulatoryAction, RegulatoryEngine};
use aero_state::{assert_ticket_issuable, Flight, Ticket};

use crate::command::{BoardTicket, CheckInTicket, CloseTicket, IssueTicket, PayTicket};
use crate::sink::EventSink;

/// Collaborators shared by every service.
#[derive(Clone)]
struct ServiceCore {
    clock: Arc<dyn Clock>,
    permissions: Arc<PermissionTable>,
    engine: Option<Arc<RegulatoryEngine>>,
    sink: Arc<dyn EventSink>,
}

impl ServiceCore {
    fn new(
        clock: Arc<dyn Clock>,
        permissions: Arc<PermissionTable>,
        engine: Option<Arc<RegulatoryEngine>>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            clock,
            permissions,
            engine,
            sink,
        }
    }

    /// Verdicts to attach to the produced record. Empty when no engine is
    /// wired or the operation has no regulatory action.
    fn evaluate(
        &self,
        action: Option<RegulatoryAction>,
        context: &RegulationContext,
        occurred_at: DateTime<Utc>,
    ) -> Vec<ComplianceResult> {
        match (&self.engine, action) {
            (Some(engine), Some(action)) => {
                vec![engine.evaluate(action, context, occurred_at.timestamp())]
            }
            _ => Vec::new(),
        }
    }

    fn append(
        &self,
        chain: &mut EventChainBuilder,
        payload: EventPayload,
        occurred_at: DateTime<Utc>,
        compliance: Vec<ComplianceResult>,
    ) -> Result<EventRecord, DomainError> {
        let record = chain
            .append(payload, occurred_at, compliance)
            .map_err(|error| {
                DomainError::InvariantViolation(format!(
                    "event payload cannot be canonicalized: {error}"
                ))
            })?;
        tracing::debug!(
            aggregate_id = %record.aggregate_id,
            event_type = record.event_type(),
            version = record.version,
            "event recorded"
        );
        self.sink.record_event(record.clone());
        Ok(record)
    }

    fn record_failure(
        &self,
        error: &DomainError,
        authority: &Authority,
        action: &str,
        aggregate_id: &str,
    ) {
        let mut context = BTreeMap::new();
        context.insert("action".to_string(), serde_json::json!(action));
        context.insert("aggregate_id".to_string(), serde_json::json!(aggregate_id));

        match DomainFailure::from_reading(
            error.to_string(),
            self.clock.now(),
            authority.actor_id(),
            context,
        ) {
            Ok(failure) => self.sink.record_failure(failure),
            Err(_) => {
                tracing::debug!(action, "naive clock reading; failure not recorded");
            }
        }
    }

    /// A transition command must target the ticket it is applied to.
    fn assert_command_targets(
        &self,
        ticket: &Ticket,
        ticket_number: &TicketNumber,
    ) -> Result<(), DomainError> {
        if ticket.ticket_number() != ticket_number {
            return Err(DomainError::InvariantViolation(
                "Command ticket_number does not match Ticket identity".to_string(),
            ));
        }
        Ok(())
    }
}

macro_rules! service_constructor {
    () => {
        /// Wire the service to its collaborators. Pass `None` for `engine`
        /// to skip regulation evaluation entirely.
        pub fn new(
            clock: Arc<dyn Clock>,
            permissions: Arc<PermissionTable>,
            engine: Option<Arc<RegulatoryEngine>>,
            sink: Arc<dyn EventSink>,
        ) -> Self {
            Self {
                core: ServiceCore::new(clock, permissions, engine, sink),
            }
        }
    };
}

/// Issues a new ticket against a bookable flight.
#[derive(Clone)]
pub struct IssueTicketService {
    core: ServiceCore,
}

impl IssueTicketService {
    service_constructor!();

    /// Execute the command, producing the new ticket and its issuance
    /// record.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvariantViolation`] on an unauthorized authority, a
    /// naive clock, a blank passenger, or a flight-identity mismatch;
    /// [`DomainError::FlightUnavailable`] against a cancelled flight. The
    /// failure is recorded to the sink first.
    pub fn execute(
        &self,
        command: &IssueTicket,
        flight: &Flight,
        authority: &Authority,
        context: &RegulationContext,
        chain: &mut EventChainBuilder,
    ) -> Result<(Ticket, EventRecord), DomainError> {
        self.try_execute(command, flight, context, chain, authority)
            .map_err(|error| {
                self.core.record_failure(
                    &error,
                    authority,
                    actions::ISSUE_TICKET,
                    command.ticket_number.as_str(),
                );
                error
            })
    }

    fn try_execute(
        &self,
        command: &IssueTicket,
        flight: &Flight,
        context: &RegulationContext,
        chain: &mut EventChainBuilder,
        authority: &Authority,
    ) -> Result<(Ticket, EventRecord), DomainError> {
        self.core
            .permissions
            .assert_authorized(actions::ISSUE_TICKET, authority)?;

        let ticket = Ticket::issue(
            command.ticket_number.clone(),
            command.flight_id.clone(),
            command.passenger_id.clone(),
            self.core.clock.as_ref(),
        )?;
        assert_ticket_issuable(&ticket, flight)?;

        let occurred_at = ticket.issued_at();
        let compliance =
            self.core
                .evaluate(Some(RegulatoryAction::IssueTicket), context, occurred_at);
        let record = self.core.append(
            chain,
            EventPayload::TicketIssued {
                ticket_number: command.ticket_number.clone(),
                flight_id: command.flight_id.clone(),
                passenger_id: command.passenger_id.clone(),
            },
            occurred_at,
            compliance,
        )?;

        Ok((ticket, record))
    }
}

/// Takes payment for an issued ticket.
#[derive(Clone)]
pub struct PayTicketService {
    core: ServiceCore,
}

impl PayTicketService {
    service_constructor!();

    /// Execute the command against `ticket`, producing the payment record.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvariantViolation`] on a mistargeted command, an
    /// unauthorized authority, or a naive clock;
    /// [`DomainError::InvalidStateTransition`] unless the ticket is
    /// `ISSUED`. The failure is recorded to the sink first.
    pub fn execute(
        &self,
        ticket: &mut Ticket,
        command: &PayTicket,
        authority: &Authority,
        context: &RegulationContext,
        chain: &mut EventChainBuilder,
    ) -> Result<EventRecord, DomainError> {
        let core = &self.core;
        let mut run = || -> Result<EventRecord, DomainError> {
            core.assert_command_targets(ticket, &command.ticket_number)?;
            core.permissions
                .assert_authorized(actions::PAY_TICKET, authority)?;
            ticket.mark_paid(core.clock.as_ref())?;

            let occurred_at = ticket.last_state_change_at();
            let compliance =
                core.evaluate(Some(RegulatoryAction::PayTicket), context, occurred_at);
            core.append(
                chain,
                EventPayload::TicketPaid {
                    ticket_number: command.ticket_number.clone(),
                },
                occurred_at,
                compliance,
            )
        };

        run().map_err(|error| {
            self.core.record_failure(
                &error,
                authority,
                actions::PAY_TICKET,
                command.ticket_number.as_str(),
            );
            error
        })
    }
}

/// Checks a paid ticket in.
#[derive(Clone)]
pub struct CheckInService {
    core: ServiceCore,
}

impl CheckInService {
    service_constructor!();

    /// Execute the command against `ticket`, producing the check-in record.
    ///
    /// # Errors
    ///
    /// As [`PayTicketService::execute`], except the ticket must be `PAID`.
    pub fn execute(
        &self,
        ticket: &mut Ticket,
        command: &CheckInTicket,
        authority: &Authority,
        context: &RegulationContext,
        chain: &mut EventChainBuilder,
    ) -> Result<EventRecord, DomainError> {
        let core = &self.core;
        let mut run = || -> Result<EventRecord, DomainError> {
            core.assert_command_targets(ticket, &command.ticket_number)?;
            core.permissions
                .assert_authorized(actions::CHECK_IN, authority)?;
            ticket.check_in(core.clock.as_ref())?;

            let occurred_at = ticket.last_state_change_at();
            let compliance = core.evaluate(Some(RegulatoryAction::CheckIn), context, occurred_at);
            core.append(
                chain,
                EventPayload::TicketCheckedIn {
                    ticket_number: command.ticket_number.clone(),
                },
                occurred_at,
                compliance,
            )
        };

        run().map_err(|error| {
            self.core.record_failure(
                &error,
                authority,
                actions::CHECK_IN,
                command.ticket_number.as_str(),
            );
            error
        })
    }
}

/// Boards a checked-in passenger.
#[derive(Clone)]
pub struct BoardService {
    core: ServiceCore,
}

impl BoardService {
    service_constructor!();

    /// Execute the command against `ticket`, producing the boarding record.
    ///
    /// # Errors
    ///
    /// As [`PayTicketService::execute`], except the ticket must be
    /// `CHECKED_IN`.
    pub fn execute(
        &self,
        ticket: &mut Ticket,
        command: &BoardTicket,
        authority: &Authority,
        context: &RegulationContext,
        chain: &mut EventChainBuilder,
    ) -> Result<EventRecord, DomainError> {
        let core = &self.core;
        let mut run = || -> Result<EventRecord, DomainError> {
            core.assert_command_targets(ticket, &command.ticket_number)?;
            core.permissions.assert_authorized(actions::BOARD, authority)?;
            ticket.board(core.clock.as_ref())?;

            let occurred_at = ticket.last_state_change_at();
            let compliance = core.evaluate(Some(RegulatoryAction::Board), context, occurred_at);
            core.append(
                chain,
                EventPayload::TicketBoarded {
                    ticket_number: command.ticket_number.clone(),
                },
                occurred_at,
                compliance,
            )
        };

        run().map_err(|error| {
            self.core.record_failure(
                &error,
                authority,
                actions::BOARD,
                command.ticket_number.as_str(),
            );
            error
        })
    }
}

/// Closes a boarded ticket after the flight completes.
///
/// Closing a ticket has no action in the regulatory vocabulary, so this
/// service never consults the engine and its records carry no verdicts.
#[derive(Clone)]
pub struct CloseService {
    core: ServiceCore,
}

impl CloseService {
    service_constructor!();

    /// Execute the command against `ticket`, producing the closing record.
    ///
    /// # Errors
    ///
    /// As [`PayTicketService::execute`], except the ticket must be
    /// `BOARDED`.
    pub fn execute(
        &self,
        ticket: &mut Ticket,
        command: &CloseTicket,
        authority: &Authority,
        chain: &mut EventChainBuilder,
    ) -> Result<EventRecord, DomainError> {
        let core = &self.core;
        let mut run = || -> Result<EventRecord, DomainError> {
            core.assert_command_targets(ticket, &command.ticket_number)?;
            core.permissions
                .assert_authorized(actions::CLOSE_TICKET, authority)?;
            ticket.close(core.clock.as_ref())?;

            core.append(
                chain,
                EventPayload::TicketClosed {
                    ticket_number: command.ticket_number.clone(),
                },
                ticket.last_state_change_at(),
                Vec::new(),
            )
        };

        run().map_err(|error| {
            self.core.record_failure(
                &error,
                authority,
                actions::CLOSE_TICKET,
                command.ticket_number.as_str(),
            );
            error
        })
    }
}
