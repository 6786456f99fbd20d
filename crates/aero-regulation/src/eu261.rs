//! # EU Regulation 261/2004 — Cancellation
//!
//! The canonical [`Regulation`] implementation; new regulations follow its
//! shape. Applies to cancellations departing EU jurisdictions. The
//! cancellation itself is always allowed; compensation and rebooking duties
//! attach once the accumulated delay reaches three hours.

use crate::action::RegulatoryAction;
use crate::context::RegulationContext;
use crate::regulation::Regulation;
use crate::result::ComplianceResult;

/// Compensation duties for cancellations departing the EU.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eu261Cancellation;

impl Eu261Cancellation {
    /// Epoch seconds for 2004-01-01T00:00:00Z, when the regulation entered
    /// into force.
    pub const EFFECTIVE_FROM: i64 = 1_072_915_200;

    /// Delay, in hours, at which compensation duties attach.
    pub const COMPENSATION_DELAY_HOURS: i64 = 3;
}

impl Regulation for Eu261Cancellation {
    fn regulation_id(&self) -> &str {
        "EU261-CANCEL"
    }

    fn jurisdiction(&self) -> &str {
        "EU"
    }

    fn law_version(&self) -> &str {
        "2004-02"
    }

    fn effective_from(&self) -> i64 {
        Self::EFFECTIVE_FROM
    }

    fn applies_to(&self, action: RegulatoryAction, context: &RegulationContext) -> bool {
        action == RegulatoryAction::Cancel
            && context
                .departure_airport
                .as_ref()
                .is_some_and(|airport| airport.jurisdiction.code == "EU")
    }

    fn evaluate(
        &self,
        _action: RegulatoryAction,
        context: &RegulationContext,
        evaluated_at: i64,
    ) -> ComplianceResult {
        let delay_hours = context.delay_hours.unwrap_or(0);
        let obligations = if delay_hours < Self::COMPENSATION_DELAY_HOURS {
            Vec::new()
        } else {
            vec![
                "PAY_COMPENSATION".to_string(),
                "OFFER_REBOOKING".to_string(),
            ]
        };

        ComplianceResult {
            allowed: true,
            obligations,
            prohibitions: Vec::new(),
            regulation_id: self.regulation_id().to_string(),
            law_version: self.law_version().to_string(),
            evaluated_at,
        }
    }
}
