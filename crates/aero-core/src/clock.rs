//! # Clock Capability
//!
//! Domain logic never reads the wall clock directly. Time is taken through
//! an injected [`Clock`], so attestation timestamps and test runs are
//! reproducible.
//!
//! A reading is either timezone-aware or naive. Every operation that stamps
//! time calls [`ClockReading::require_utc`] and fails on a naive reading
//! rather than guessing an offset.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::DomainError;

/// A single reading taken from a [`Clock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockReading {
    /// An instant carrying an explicit UTC offset.
    Utc(DateTime<Utc>),
    /// An instant with no timezone information attached.
    Naive(NaiveDateTime),
}

impl ClockReading {
    /// Return the UTC instant, rejecting naive readings.
    ///
    /// `subject` names the timestamp being taken (e.g. "Ticket issue time")
    /// and is interpolated into the error message.
    pub fn require_utc(self, subject: &str) -> Result<DateTime<Utc>, DomainError> {
        match self {
            Self::Utc(instant) => Ok(instant),
            Self::Naive(_) => Err(DomainError::InvariantViolation(format!(
                "{subject} must be timezone-aware"
            ))),
        }
    }

    /// Whether the reading carries timezone information.
    pub fn is_timezone_aware(self) -> bool {
        matches!(self, Self::Utc(_))
    }
}

/// An injected time source.
pub trait Clock: Send + Sync {
    /// Take a reading of the current instant.
    fn now(&self) -> ClockReading;
}

/// The production clock: reads the system wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockReading {
        ClockReading::Utc(Utc::now())
    }
}

/// A clock pinned to a fixed reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    reading: ClockReading,
}

impl FixedClock {
    /// Pin the clock to a UTC instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            reading: ClockReading::Utc(instant),
        }
    }

    /// Pin the clock to a naive instant with no timezone information.
    pub fn naive(instant: NaiveDateTime) -> Self {
        Self {
            reading: ClockReading::Naive(instant),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> ClockReading {
        self.reading
    }
}
