use askmom_core::{AsyncStyle, DisplayLine, Phone, RunState};
use async_trait::async_trait;
use futures::future::{self, FutureExt, Ready, TryFutureExt};

use crate::core::{AskMom, RunContext};
use crate::error::{OrchestratorError, Result};
use crate::request::PhoneRequest;
use crate::show_off::show_off;

/// Request chained into show-off, with a line written before and after the
/// chain is built.
///
/// Building the chain does not run it: a future does nothing until it is
/// driven. Both surrounding lines are therefore written before any step of
/// the chain executes, however fast the request settles.
pub struct ChainedOrchestrator {
    request: PhoneRequest,
}

impl ChainedOrchestrator {
    pub fn new(request: PhoneRequest) -> Self {
        Self { request }
    }
}

fn record_phone(ctx: &RunContext, phone: Phone) -> Ready<Result<Phone>> {
    future::ready(ctx.phone_obtained().map(|()| phone))
}

#[async_trait]
impl AskMom for ChainedOrchestrator {
    fn style(&self) -> AsyncStyle {
        AsyncStyle::Chained
    }

    async fn run(&self, ctx: &RunContext) -> Result<RunState> {
        ctx.output(DisplayLine::before_asking());

        let chain = self
            .request
            .outcome()
            .err_into::<OrchestratorError>()
            .and_then(|phone| record_phone(ctx, phone))
            .and_then(|phone| show_off(&phone).map(Ok::<DisplayLine, OrchestratorError>))
            .map_ok(Some);

        ctx.output(DisplayLine::after_asking());

        ctx.settle(chain.await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::test_support::{request, run};
    use askmom_core::{DecisionFlag, PhoneOffer};
    use events::OutputSink;
    use std::time::Duration;

    #[tokio::test]
    async fn test_surrounding_lines_come_first() {
        let orchestrator = ChainedOrchestrator::new(request(PhoneOffer::gold_iphone(), true));
        let report = run(&orchestrator).await;

        assert_eq!(
            report.lines,
            vec![
                DisplayLine::new("before asking Mom"),
                DisplayLine::new("after asking mom"),
                DisplayLine::new("Hey friend, I have a new gold iPhone XR phone"),
            ]
        );
        assert_eq!(
            report.transitions,
            vec![RunState::Pending, RunState::PhoneObtained, RunState::Succeeded]
        );
    }

    #[tokio::test]
    async fn test_order_holds_for_an_already_settled_request() {
        let request = request(PhoneOffer::gold_iphone(), true);
        assert!(request.outcome().await.is_ok());

        let report = run(&ChainedOrchestrator::new(request)).await;
        assert_eq!(report.lines[1], DisplayLine::after_asking());
        assert_eq!(report.lines.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_order_holds_with_latency() {
        let request = PhoneRequest::with_latency(
            PhoneOffer::gold_iphone(),
            DecisionFlag::happy(),
            Duration::from_secs(2),
        );
        let orchestrator = ChainedOrchestrator::new(request);
        let ctx = RunContext::new(AsyncStyle::Chained, OutputSink::default());

        orchestrator.run(&ctx).await.unwrap();
        let lines = ctx.into_report().lines;
        assert_eq!(lines[0], DisplayLine::before_asking());
        assert_eq!(lines[1], DisplayLine::after_asking());
        assert_eq!(lines[2], "Hey friend, I have a new gold iPhone XR phone");
    }

    #[tokio::test]
    async fn test_refusal_short_circuits_show_off() {
        let orchestrator = ChainedOrchestrator::new(request(PhoneOffer::gold_iphone(), false));
        let report = run(&orchestrator).await;

        assert_eq!(report.state, RunState::Failed);
        assert_eq!(
            report.lines,
            vec![
                DisplayLine::before_asking(),
                DisplayLine::after_asking(),
                DisplayLine::new("Mom is not happy."),
            ]
        );
        assert!(!report
            .lines
            .iter()
            .any(|line| line.as_str().starts_with("Hey friend")));
    }
}
