//! # aero-command — Command Orchestration
//!
//! The outermost layer of the core: typed commands, one service per
//! command, and the event-sink port. A service authorizes the acting
//! authority, invokes the aggregate under the injected clock, evaluates the
//! regulation engine when one is wired, appends to the aggregate's hash
//! chain, and forwards the record to the sink. The crate performs no I/O of
//! its own; everything durable happens behind [`EventSink`].

pub mod command;
pub mod service;
pub mod sink;

pub use command::{BoardTicket, CheckInTicket, CloseTicket, IssueTicket, PayTicket};
pub use service::{
    BoardService, CheckInService, CloseService, IssueTicketService, PayTicketService,
};
pub use sink::{EventSink, MemoryEventSink};
