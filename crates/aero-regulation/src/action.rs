//! # Regulatory Action Vocabulary

use std::fmt;

use serde::{Deserialize, Serialize};

/// An action subject to regulatory evaluation.
///
/// This vocabulary is closed: regulations match on it exhaustively. It is
/// distinct from the permission-table action strings, which stay open so
/// that unknown names can be looked up and denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegulatoryAction {
    /// A ticket is issued against a flight.
    IssueTicket,
    /// Payment is taken for a ticket.
    PayTicket,
    /// A passenger checks in.
    CheckIn,
    /// A passenger boards.
    Board,
    /// A flight is closed out after arrival.
    CloseFlight,
    /// A flight is cancelled.
    Cancel,
}

impl RegulatoryAction {
    /// Stable uppercase name, matching the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IssueTicket => "ISSUE_TICKET",
            Self::PayTicket => "PAY_TICKET",
            Self::CheckIn => "CHECK_IN",
            Self::Board => "BOARD",
            Self::CloseFlight => "CLOSE_FLIGHT",
            Self::Cancel => "CANCEL",
        }
    }
}

impl fmt::Display for RegulatoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
