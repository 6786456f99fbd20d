//! # The Event-Sink Port
//!
//! The core never performs I/O. Everything it decides flows out through an
//! [`EventSink`]: committed events on one channel, rejected attempts on the
//! other. Durability, transport, and retry all belong to the implementation
//! behind the port.

use parking_lot::Mutex;

use aero_ledger::{DomainFailure, EventRecord};

/// Destination for domain facts.
pub trait EventSink: Send + Sync {
    /// Record a committed event.
    fn record_event(&self, event: EventRecord);

    /// Record a rejected attempt.
    fn record_failure(&self, failure: DomainFailure);
}

/// An in-memory sink for tests and single-process runs.
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<EventRecord>>,
    failures: Mutex<Vec<DomainFailure>>,
}

impl MemoryEventSink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, in record order.
    pub fn events(&self) -> Vec<EventRecord> {
        self.events.lock().clone()
    }

    /// Snapshot of the recorded failures, in record order.
    pub fn failures(&self) -> Vec<DomainFailure> {
        self.failures.lock().clone()
    }
}

impl EventSink for MemoryEventSink {
    fn record_event(&self, event: EventRecord) {
        self.events.lock().push(event);
    }

    fn record_failure(&self, failure: DomainFailure) {
        self.failures.lock().push(failure);
    }
}
