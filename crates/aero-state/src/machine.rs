//! # Generic Transition Validator
//!
//! An explicit state machine over a closed state vocabulary, configured once
//! with the permitted next states per source state. Illegal and implicit
//! state changes are rejected before any mutation; a state absent from the
//! mapping permits nothing.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use aero_core::DomainError;

/// A mapping from each state to the set of states it may move to.
#[derive(Debug, Clone)]
pub struct StateMachine<S> {
    transitions: BTreeMap<S, BTreeSet<S>>,
}

impl<S> StateMachine<S>
where
    S: Copy + Ord + fmt::Display,
{
    /// Build a machine from `(state, permitted next states)` pairs.
    pub fn new<T>(transitions: impl IntoIterator<Item = (S, T)>) -> Self
    where
        T: IntoIterator<Item = S>,
    {
        let transitions = transitions
            .into_iter()
            .map(|(from, targets)| (from, targets.into_iter().collect()))
            .collect();
        Self { transitions }
    }

    /// Whether `from` may move to `to`. Pure query, no side effect.
    pub fn can_transition(&self, from: S, to: S) -> bool {
        self.transitions
            .get(&from)
            .is_some_and(|targets| targets.contains(&to))
    }

    /// Reject the move unless `to` is in `from`'s permitted set.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidStateTransition`] naming both states.
    pub fn assert_transition(&self, from: S, to: S) -> Result<(), DomainError> {
        if !self.can_transition(from, to) {
            return Err(DomainError::InvalidStateTransition {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Gate {
        Open,
        Closing,
        Closed,
    }

    impl fmt::Display for Gate {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(match self {
                Self::Open => "OPEN",
                Self::Closing => "CLOSING",
                Self::Closed => "CLOSED",
            })
        }
    }

    fn machine() -> StateMachine<Gate> {
        StateMachine::new([
            (Gate::Open, vec![Gate::Closing]),
            (Gate::Closing, vec![Gate::Closed]),
            (Gate::Closed, vec![]),
        ])
    }

    #[test]
    fn permitted_moves_pass() {
        let machine = machine();
        assert!(machine.can_transition(Gate::Open, Gate::Closing));
        assert!(machine.assert_transition(Gate::Closing, Gate::Closed).is_ok());
    }

    #[test]
    fn skipping_a_state_is_rejected_with_both_states_named() {
        let err = machine()
            .assert_transition(Gate::Open, Gate::Closed)
            .unwrap_err();
        assert_eq!(format!("{err}"), "illegal state transition: OPEN -> CLOSED");
    }

    #[test]
    fn back_edges_are_rejected() {
        assert!(!machine().can_transition(Gate::Closed, Gate::Open));
    }

    #[test]
    fn empty_target_set_permits_nothing() {
        let machine = machine();
        assert!(!machine.can_transition(Gate::Closed, Gate::Closing));
        assert!(!machine.can_transition(Gate::Closed, Gate::Closed));
    }

    #[test]
    fn state_absent_from_the_mapping_permits_nothing() {
        let machine = StateMachine::new([(Gate::Open, vec![Gate::Closing])]);
        assert!(!machine.can_transition(Gate::Closed, Gate::Open));
    }

    #[test]
    fn self_transition_is_not_implicit() {
        assert!(!machine().can_transition(Gate::Open, Gate::Open));
    }
}
