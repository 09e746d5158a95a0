//! Run phase transition rules

use super::types::RunPhase;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: RunPhase, to: RunPhase },
    #[error("Cannot transition from terminal state {state}")]
    FromTerminalState { state: RunPhase },
}

pub struct StateTransition;

impl StateTransition {
    /// Check that moving from `from` to `to` is legal.
    pub fn validate(from: RunPhase, to: RunPhase) -> Result<(), TransitionError> {
        if Self::is_terminal(from) {
            return Err(TransitionError::FromTerminalState { state: from });
        }

        let is_valid = matches!(
            (from, to),
            (RunPhase::Idle, RunPhase::Submitting)
                | (RunPhase::Submitting, RunPhase::Draining)
                // next category
                | (RunPhase::Draining, RunPhase::Submitting)
                | (RunPhase::Draining, RunPhase::Aggregating)
                | (RunPhase::Aggregating, RunPhase::Rendered)
        );

        if is_valid {
            Ok(())
        } else {
            Err(TransitionError::InvalidTransition { from, to })
        }
    }

    pub fn is_terminal(phase: RunPhase) -> bool {
        matches!(phase, RunPhase::Rendered)
    }
}
