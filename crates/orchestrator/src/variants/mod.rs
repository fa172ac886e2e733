//! Orchestrator implementations, one per asynchronous style.
//!
//! - [`CallbackOrchestrator`] - single continuation on the request (run1)
//! - [`ChainedOrchestrator`] - request chained into show-off, lines around the chain (run2)
//! - [`ArrowOrchestrator`] - the same chain written with inline closures (run3)
//! - [`SequentialOrchestrator`] - `async`/`await` in program order (run4)

mod arrow;
mod callback;
mod chained;
mod sequential;

pub use arrow::ArrowOrchestrator;
pub use callback::CallbackOrchestrator;
pub use chained::ChainedOrchestrator;
pub use sequential::SequentialOrchestrator;

#[cfg(test)]
pub(crate) mod test_support {
    use askmom_core::{DecisionFlag, PhoneOffer};
    use events::OutputSink;

    use crate::core::{AskMom, RunContext, RunReport};
    use crate::request::PhoneRequest;

    pub fn request(offer: PhoneOffer, happy: bool) -> PhoneRequest {
        PhoneRequest::new(offer, DecisionFlag::from(happy))
    }

    pub async fn run(orchestrator: &dyn AskMom) -> RunReport {
        let ctx = RunContext::new(orchestrator.style(), OutputSink::default());
        orchestrator.run(&ctx).await.unwrap();
        ctx.into_report()
    }
}
