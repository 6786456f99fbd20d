//! # Authority
//!
//! Who is acting. Every state-changing command is executed by an
//! [`Authority`]: a non-blank actor identity exercising one of a closed set
//! of roles. The [`crate::permission`] table decides what each role may do;
//! this module only models identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The role under which an actor acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorityRole {
    /// Automated issuance and closure processes.
    System,
    /// The travelling passenger.
    Passenger,
    /// Check-in desk staff.
    CheckinAgent,
    /// Gate staff controlling boarding.
    GateAgent,
    /// Flight operations control.
    FlightOps,
    /// The aircraft captain.
    Captain,
    /// Security officers.
    Security,
    /// Finance back office.
    Finance,
}

impl AuthorityRole {
    /// Stable uppercase name, matching the wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "SYSTEM",
            Self::Passenger => "PASSENGER",
            Self::CheckinAgent => "CHECKIN_AGENT",
            Self::GateAgent => "GATE_AGENT",
            Self::FlightOps => "FLIGHT_OPS",
            Self::Captain => "CAPTAIN",
            Self::Security => "SECURITY",
            Self::Finance => "FINANCE",
        }
    }
}

impl fmt::Display for AuthorityRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A legally accountable actor: identity plus role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authority {
    actor_id: String,
    role: AuthorityRole,
}

impl Authority {
    /// Create an authority, rejecting a blank actor identity.
    pub fn new(actor_id: impl Into<String>, role: AuthorityRole) -> Result<Self, DomainError> {
        let actor_id = actor_id.into();
        if actor_id.trim().is_empty() {
            return Err(DomainError::InvariantViolation(
                "Authority must have an actor_id".to_string(),
            ));
        }
        Ok(Self { actor_id, role })
    }

    /// The actor's identity string.
    pub fn actor_id(&self) -> &str {
        &self.actor_id
    }

    /// The role the actor holds.
    pub fn role(&self) -> AuthorityRole {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_display_matches_wire_form() {
        assert_eq!(AuthorityRole::CheckinAgent.to_string(), "CHECKIN_AGENT");
        assert_eq!(
            serde_json::to_value(AuthorityRole::CheckinAgent).unwrap(),
            serde_json::json!("CHECKIN_AGENT")
        );
    }

    #[test]
    fn every_role_round_trips_through_serde() {
        for role in [
            AuthorityRole::System,
            AuthorityRole::Passenger,
            AuthorityRole::CheckinAgent,
            AuthorityRole::GateAgent,
            AuthorityRole::FlightOps,
            AuthorityRole::Captain,
            AuthorityRole::Security,
            AuthorityRole::Finance,
        ] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{role}\""));
            let back: AuthorityRole = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn authority_requires_actor_id() {
        let err = Authority::new("   ", AuthorityRole::System).unwrap_err();
        assert!(format!("{err}").contains("actor_id"));
    }

    #[test]
    fn authority_carries_identity_and_role() {
        let authority = Authority::new("ops-1", AuthorityRole::FlightOps).unwrap();
        assert_eq!(authority.actor_id(), "ops-1");
        assert_eq!(authority.role(), AuthorityRole::FlightOps);
    }
}
