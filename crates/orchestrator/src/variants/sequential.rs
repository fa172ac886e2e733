use askmom_core::{AsyncStyle, DisplayLine, RunState};
use async_trait::async_trait;

use crate::core::{AskMom, RunContext};
use crate::error::{OrchestratorError, Result};
use crate::request::PhoneRequest;
use crate::show_off::show_off_async;

/// Plain `async`/`await`: lines come out in program order, and a refusal
/// aborts the attempt block and is handled around it.
pub struct SequentialOrchestrator {
    request: PhoneRequest,
}

impl SequentialOrchestrator {
    pub fn new(request: PhoneRequest) -> Self {
        Self { request }
    }
}

#[async_trait]
impl AskMom for SequentialOrchestrator {
    fn style(&self) -> AsyncStyle {
        AsyncStyle::Sequential
    }

    async fn run(&self, ctx: &RunContext) -> Result<RunState> {
        let attempt = async {
            ctx.output(DisplayLine::before_asking());

            let phone = self.request.outcome().await?;
            ctx.phone_obtained()?;
            let message = show_off_async(phone).await;

            ctx.output(message);
            ctx.output(DisplayLine::after_asking());
            Ok::<Option<DisplayLine>, OrchestratorError>(None)
        };

        ctx.settle(attempt.await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::test_support::{request, run};
    use askmom_core::PhoneOffer;

    #[tokio::test]
    async fn test_lines_in_program_order() {
        let orchestrator =
            SequentialOrchestrator::new(request(PhoneOffer::gold_iphone_terse(), true));
        let report = run(&orchestrator).await;

        assert_eq!(report.state, RunState::Succeeded);
        assert_eq!(
            report.lines,
            vec![
                DisplayLine::new("before asking Mom"),
                DisplayLine::new("Hey friend, I have a new gold iPhone XR phone"),
                DisplayLine::new("after asking mom"),
            ]
        );
    }

    #[tokio::test]
    async fn test_refusal_skips_rest_of_block() {
        let orchestrator =
            SequentialOrchestrator::new(request(PhoneOffer::gold_iphone_terse(), false));
        let report = run(&orchestrator).await;

        assert_eq!(report.state, RunState::Failed);
        assert_eq!(
            report.lines,
            vec![
                DisplayLine::before_asking(),
                DisplayLine::new("mom is not happy"),
            ]
        );
    }
}
