//! # The Regulation Trait

use crate::action::RegulatoryAction;
use crate::context::RegulationContext;
use crate::result::ComplianceResult;

/// A single regulation: scoped applicability plus a pure evaluation rule.
///
/// `applies_to` decides whether the regulation governs an action in a given
/// context; `evaluate` renders the verdict. The engine calls `evaluate` only
/// for regulations that are in force and applicable, but `evaluate` must
/// still tolerate context fields beyond those `applies_to` checked being
/// absent.
pub trait Regulation: Send + Sync {
    /// Stable identifier, e.g. `EU261-CANCEL`.
    fn regulation_id(&self) -> &str;

    /// Code of the jurisdiction the regulation belongs to, e.g. `EU`.
    fn jurisdiction(&self) -> &str;

    /// Version of the underlying law text.
    fn law_version(&self) -> &str;

    /// Epoch seconds at which the regulation entered into force.
    fn effective_from(&self) -> i64;

    /// Whether this regulation governs `action` in `context`.
    fn applies_to(&self, action: RegulatoryAction, context: &RegulationContext) -> bool;

    /// Render a verdict. `evaluated_at` is carried into the result verbatim.
    fn evaluate(
        &self,
        action: RegulatoryAction,
        context: &RegulationContext,
        evaluated_at: i64,
    ) -> ComplianceResult;
}
