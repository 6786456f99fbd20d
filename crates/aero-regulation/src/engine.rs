//! # Regulatory Engine — Rule Composition
//!
//! Composes an ordered set of regulations into one verdict:
//!
//! 1. Select the regulations in force (`effective_from <= evaluated_at`)
//!    whose `applies_to` holds, preserving configuration order.
//! 2. Evaluate all of them. Evaluation is never short-circuited; precedence
//!    is decided over the computed results, not by skipping evaluation.
//! 3. The first denying result in order is returned verbatim.
//! 4. Otherwise the allowing results merge: obligations concatenate in
//!    order with duplicates preserved, the composite is labelled
//!    `MULTI`/`COMPOSITE`, and `evaluated_at` is taken from the first
//!    applicable result, or 0 when none applied.

use std::sync::Arc;

use crate::action::RegulatoryAction;
use crate::context::RegulationContext;
use crate::regulation::Regulation;
use crate::result::ComplianceResult;

/// Composes multiple regulations into a single verdict.
#[derive(Clone)]
pub struct RegulatoryEngine {
    regulations: Vec<Arc<dyn Regulation>>,
}

impl RegulatoryEngine {
    /// Build an engine over an ordered set of regulations. Configuration
    /// order decides precedence between denying regulations.
    pub fn new(regulations: Vec<Arc<dyn Regulation>>) -> Self {
        Self { regulations }
    }

    /// Evaluate `action` against every applicable regulation.
    pub fn evaluate(
        &self,
        action: RegulatoryAction,
        context: &RegulationContext,
        evaluated_at: i64,
    ) -> ComplianceResult {
        let results: Vec<ComplianceResult> = self
            .regulations
            .iter()
            .filter(|regulation| {
                regulation.effective_from() <= evaluated_at
                    && regulation.applies_to(action, context)
            })
            .map(|regulation| regulation.evaluate(action, context, evaluated_at))
            .collect();

        tracing::debug!(action = %action, evaluated = results.len(), "regulations evaluated");

        if let Some(denied) = results.iter().find(|result| !result.allowed) {
            tracing::debug!(regulation_id = %denied.regulation_id, "action denied by regulation");
            return denied.clone();
        }

        merge(results)
    }
}

/// Fold allowing results into a synthetic composite verdict.
fn merge(results: Vec<ComplianceResult>) -> ComplianceResult {
    let evaluated_at = results.first().map_or(0, |result| result.evaluated_at);
    let obligations = results
        .into_iter()
        .flat_map(|result| result.obligations)
        .collect();

    ComplianceResult {
        allowed: true,
        obligations,
        prohibitions: Vec::new(),
        regulation_id: "MULTI".to_string(),
        law_version: "COMPOSITE".to_string(),
        evaluated_at,
    }
}
