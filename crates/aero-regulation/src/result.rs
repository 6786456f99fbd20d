//! # Compliance Results

use serde::{Deserialize, Serialize};

/// The verdict of evaluating one or more regulations against an action.
///
/// Obligations are duties imposed on the operator if the action proceeds;
/// prohibitions are the explicit blockers recorded by a denying regulation.
/// Both preserve evaluation order, and obligations are never deduplicated:
/// two regulations imposing what looks like the same duty is
/// domain-significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Whether the action may proceed.
    pub allowed: bool,
    /// Duties imposed on the operator, in evaluation order.
    pub obligations: Vec<String>,
    /// Explicit blockers recorded by a denying regulation.
    pub prohibitions: Vec<String>,
    /// The regulation that produced this verdict, or `MULTI` for a composite.
    pub regulation_id: String,
    /// Version of the underlying law text, or `COMPOSITE` for a composite.
    pub law_version: String,
    /// Epoch seconds at which the evaluation ran. Carried verbatim into
    /// records; never re-read from a clock downstream.
    pub evaluated_at: i64,
}
