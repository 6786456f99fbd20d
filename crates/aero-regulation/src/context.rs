//! # Evaluation Context

use serde::{Deserialize, Serialize};

use crate::jurisdiction::Airport;

/// Facts about the situation under evaluation.
///
/// Regulations read only the fields they govern. An absent field makes a
/// regulation inapplicable or evaluates as its zero case; it never panics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulationContext {
    /// Departure airport of the governed flight.
    pub departure_airport: Option<Airport>,
    /// Accumulated delay, in whole hours.
    pub delay_hours: Option<i64>,
}

impl RegulationContext {
    /// An empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the departure airport.
    pub fn with_departure_airport(mut self, airport: Airport) -> Self {
        self.departure_airport = Some(airport);
        self
    }

    /// Attach the accumulated delay in hours.
    pub fn with_delay_hours(mut self, hours: i64) -> Self {
        self.delay_hours = Some(hours);
        self
    }
}
