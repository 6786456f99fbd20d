//! # Permission Enforcement
//!
//! A fail-closed mapping from action names to the roles permitted to perform
//! them. An unknown action is denial, never implicit permission: a typo can
//! refuse service but can never grant access. Authorization failure is an
//! invariant breach rather than a soft "permission denied", because an
//! unauthorized mutation must never reach an aggregate.
//!
//! The table is immutable after construction. Build it once at wiring time
//! and share it by reference.

use std::collections::{BTreeMap, BTreeSet};

use crate::authority::{Authority, AuthorityRole};
use crate::error::DomainError;

/// Action names recognised by the standard airline table.
pub mod actions {
    /// Issue a new ticket against a flight.
    pub const ISSUE_TICKET: &str = "ISSUE_TICKET";
    /// Take payment for an issued ticket.
    pub const PAY_TICKET: &str = "PAY_TICKET";
    /// Check a paid ticket in.
    pub const CHECK_IN: &str = "CHECK_IN";
    /// Board a checked-in passenger.
    pub const BOARD: &str = "BOARD";
    /// Close a boarded ticket after the flight completes.
    pub const CLOSE_TICKET: &str = "CLOSE_TICKET";
    /// Overrule a boarding decision.
    pub const OVERRIDE_BOARDING: &str = "OVERRIDE_BOARDING";
}

/// An immutable action-to-permitted-roles table.
#[derive(Debug, Clone)]
pub struct PermissionTable {
    permissions: BTreeMap<String, BTreeSet<AuthorityRole>>,
}

impl PermissionTable {
    /// Build a table from `(action, permitted roles)` pairs.
    pub fn new<A, R>(entries: impl IntoIterator<Item = (A, R)>) -> Self
    where
        A: Into<String>,
        R: IntoIterator<Item = AuthorityRole>,
    {
        let permissions = entries
            .into_iter()
            .map(|(action, roles)| (action.into(), roles.into_iter().collect()))
            .collect();
        Self { permissions }
    }

    /// The standard airline action table.
    pub fn standard() -> Self {
        use AuthorityRole::{Captain, CheckinAgent, Finance, GateAgent, Passenger, Security, System};
        Self::new([
            (actions::ISSUE_TICKET, vec![System]),
            (actions::PAY_TICKET, vec![Passenger, Finance]),
            (actions::CHECK_IN, vec![CheckinAgent]),
            (actions::BOARD, vec![GateAgent]),
            (actions::CLOSE_TICKET, vec![System]),
            (actions::OVERRIDE_BOARDING, vec![Captain, Security]),
        ])
    }

    /// The roles permitted to perform `action`, if the action is registered.
    pub fn permitted_roles(&self, action: &str) -> Option<&BTreeSet<AuthorityRole>> {
        self.permissions.get(action)
    }

    /// Reject the action unless `authority`'s role is explicitly permitted.
    ///
    /// An action missing from the table, or registered with an empty role
    /// set, fails as unregistered.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvariantViolation`] on an unregistered action or a
    /// role outside the permitted set.
    pub fn assert_authorized(&self, action: &str, authority: &Authority) -> Result<(), DomainError> {
        let permitted = self
            .permissions
            .get(action)
            .filter(|roles| !roles.is_empty())
            .ok_or_else(|| {
                DomainError::InvariantViolation(format!(
                    "Action '{action}' is not registered in permission matrix"
                ))
            })?;

        if !permitted.contains(&authority.role()) {
            return Err(DomainError::InvariantViolation(format!(
                "Authority {} is not permitted to perform {action}",
                authority.role()
            )));
        }
        Ok(())
    }
}
