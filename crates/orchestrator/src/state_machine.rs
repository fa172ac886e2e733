use askmom_core::RunState;

use crate::error::{OrchestratorError, Result};

pub struct RunStateMachine;

impl RunStateMachine {
    pub fn validate_transition(from: &RunState, to: &RunState) -> Result<()> {
        let allowed = Self::allowed_transitions(from);

        if allowed.contains(to) {
            Ok(())
        } else {
            Err(OrchestratorError::InvalidTransition {
                from: from.as_str().to_string(),
                to: to.as_str().to_string(),
            })
        }
    }

    fn allowed_transitions(from: &RunState) -> Vec<RunState> {
        match from {
            RunState::Pending => vec![RunState::PhoneObtained, RunState::Failed],
            RunState::PhoneObtained => vec![RunState::Succeeded, RunState::Failed],
            RunState::Succeeded | RunState::Failed => vec![],
        }
    }

    pub fn can_transition(from: &RunState, to: &RunState) -> bool {
        Self::validate_transition(from, to).is_ok()
    }
}
