//! Core abstractions for running an orchestrator.
//!
//! - [`AskMom`] - Trait that all orchestrators implement
//! - [`RunContext`] - State machine and sink access for a single run
//! - [`RunReport`] - What a finished run produced

mod context;
mod pipeline;

pub use context::{RunContext, RunReport};
pub use pipeline::AskMom;
