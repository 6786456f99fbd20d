//! # Standard Operating Procedure Expectations

use serde::{Deserialize, Serialize};

/// A maximum acceptable delay for a named operational action.
///
/// Breaches are facts, not failures: collaborators record them as
/// SOP-violation events rather than rejecting the late action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SopExpectation {
    /// The operational action the expectation governs.
    pub action: String,
    /// Largest acceptable delay, in minutes.
    pub max_delay_minutes: i64,
}

impl SopExpectation {
    /// An expectation for `action` with the given delay ceiling.
    pub fn new(action: impl Into<String>, max_delay_minutes: i64) -> Self {
        Self {
            action: action.into(),
            max_delay_minutes,
        }
    }

    /// Gate boarding must close within fifteen minutes of schedule.
    pub fn boarding_close() -> Self {
        Self::new("boarding_close", 15)
    }

    /// Whether an observed delay breaches this expectation.
    pub fn is_breached_by(&self, actual_delay_minutes: i64) -> bool {
        actual_delay_minutes > self.max_delay_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boarding_close_allows_fifteen_minutes() {
        let expectation = SopExpectation::boarding_close();
        assert_eq!(expectation.action, "boarding_close");
        assert!(!expectation.is_breached_by(15));
        assert!(expectation.is_breached_by(16));
    }
}
