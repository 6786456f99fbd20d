//! # Flight Aggregate
//!
//! Unlike the ticket, the flight transforms as a value: `delay` and `cancel`
//! return a new [`Flight`] and leave the receiver untouched. `CANCELLED` is
//! terminal, and `cancel` on a cancelled flight is a no-op.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use aero_core::FlightId;

/// Operational status of a [`Flight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    /// Operating as planned.
    Scheduled,
    /// Operating later than planned.
    Delayed,
    /// Airborne.
    Departed,
    /// On the ground at the destination.
    Arrived,
    /// Will not operate. Terminal.
    Cancelled,
}

impl FlightStatus {
    /// Stable uppercase name, matching the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Delayed => "DELAYED",
            Self::Departed => "DEPARTED",
            Self::Arrived => "ARRIVED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Whether no further status change leaves this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The flight aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Identity of the flight.
    pub flight_id: FlightId,
    /// IATA code of the departure airport.
    pub origin: String,
    /// IATA code of the arrival airport.
    pub destination: String,
    /// Scheduled departure instant.
    pub departure_time: DateTime<Utc>,
    /// Scheduled arrival instant.
    pub arrival_time: DateTime<Utc>,
    /// Registration of the assigned aircraft.
    pub aircraft_id: String,
    /// Current operational status.
    pub status: FlightStatus,
}

impl Flight {
    /// Create a flight in the `SCHEDULED` status.
    pub fn schedule(
        flight_id: FlightId,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
        aircraft_id: impl Into<String>,
    ) -> Self {
        Self {
            flight_id,
            origin: origin.into(),
            destination: destination.into(),
            departure_time,
            arrival_time,
            aircraft_id: aircraft_id.into(),
            status: FlightStatus::Scheduled,
        }
    }

    /// A copy with both scheduled times shifted by `minutes`. The flight's
    /// duration is invariant under delay, and status is not modified.
    pub fn delay(&self, minutes: i64) -> Self {
        let delta = Duration::minutes(minutes);
        Self {
            departure_time: self.departure_time + delta,
            arrival_time: self.arrival_time + delta,
            ..self.clone()
        }
    }

    /// A cancelled copy. Already-cancelled flights are returned unchanged.
    pub fn cancel(&self) -> Self {
        if self.status == FlightStatus::Cancelled {
            return self.clone();
        }
        Self {
            status: FlightStatus::Cancelled,
            ..self.clone()
        }
    }

    /// Scheduled block time, arrival minus departure.
    pub fn duration(&self) -> Duration {
        self.arrival_time - self.departure_time
    }
}
