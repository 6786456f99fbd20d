//! # Denied-Boarding Compensation
//!
//! EU261 Article 7 fixed-amount bands, keyed by the reason boarding was
//! denied and the great-circle distance of the flight.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why boarding was denied to a ticketed passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeniedBoardingReason {
    /// The flight was oversold.
    Overbooking,
    /// An operational constraint (aircraft swap, weight and balance).
    Operational,
    /// A safety or security determination.
    Safety,
    /// Missing or invalid travel documents.
    Documentation,
    /// The passenger's own conduct or late arrival.
    PassengerFault,
}

impl DeniedBoardingReason {
    /// Stable lowercase name, matching the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overbooking => "overbooking",
            Self::Operational => "operational",
            Self::Safety => "safety",
            Self::Documentation => "documentation",
            Self::PassengerFault => "passenger_fault",
        }
    }
}

impl fmt::Display for DeniedBoardingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed compensation amount owed under EU261.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eu261Compensation {
    /// Amount owed, in whole euro.
    pub amount_eur: u32,
    /// ISO 4217 currency code. Always `EUR`.
    pub currency: String,
}

impl Eu261Compensation {
    /// A compensation amount in euro.
    pub fn new(amount_eur: u32) -> Self {
        Self {
            amount_eur,
            currency: "EUR".to_string(),
        }
    }
}

/// Article 7 compensation for a denied boarding.
///
/// Passengers denied boarding through their own fault are owed nothing.
/// Otherwise the amount is banded by distance: 250 EUR up to 1500 km,
/// 400 EUR up to 3500 km, 600 EUR beyond.
pub fn denied_boarding_compensation(
    reason: DeniedBoardingReason,
    distance_km: u32,
) -> Option<Eu261Compensation> {
    if reason == DeniedBoardingReason::PassengerFault {
        return None;
    }

    let amount_eur = if distance_km <= 1_500 {
        250
    } else if distance_km <= 3_500 {
        400
    } else {
        600
    };
    Some(Eu261Compensation::new(amount_eur))
}
