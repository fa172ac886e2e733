//! The trait every orchestrator implements.

use askmom_core::{AsyncStyle, RunState};
use async_trait::async_trait;

use crate::error::Result;

use super::context::RunContext;

/// One way of asking mom for a phone.
///
/// Every implementation runs the same pipeline (phone request, optionally
/// show-off, output) and differs only in the asynchronous idiom used to wire
/// the steps. Refusals must be caught inside `run` and written to the sink
/// through [`RunContext::settle`]; the returned error is reserved for
/// orchestration faults.
#[async_trait]
pub trait AskMom: Send + Sync {
    fn style(&self) -> AsyncStyle;

    /// Drive the pipeline to a terminal state.
    async fn run(&self, ctx: &RunContext) -> Result<RunState>;
}
