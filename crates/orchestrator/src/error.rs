use askmom_core::{CoreError, DecisionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Mom refused. Caught at the orchestrator boundary and written to the sink.
    #[error("{0}")]
    Declined(#[from] DecisionError),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("No orchestrator wired for trigger: {0}")]
    UnknownTrigger(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Run task failed: {0}")]
    TaskFailed(String),
}

pub type Result<T> = std::result::Result<T, OrchestratorError>;
