pub mod core;
pub mod engine;
pub mod error;
pub mod request;
pub mod show_off;
pub mod state_machine;
pub mod variants;

pub use crate::core::{AskMom, RunContext, RunReport};
pub use engine::{EngineConfig, TriggerBoard};
pub use error::{OrchestratorError, Result};
pub use request::{PhoneRequest, Settlement};
pub use show_off::{show_off, show_off_async};
pub use state_machine::RunStateMachine;
