use askmom_core::{AsyncStyle, DisplayLine, RunState};
use async_trait::async_trait;
use futures::FutureExt;

use crate::core::{AskMom, RunContext};
use crate::error::{OrchestratorError, Result};
use crate::request::PhoneRequest;

/// One continuation attached to the request. Announces the gift directly and
/// never calls show-off.
pub struct CallbackOrchestrator {
    request: PhoneRequest,
}

impl CallbackOrchestrator {
    pub fn new(request: PhoneRequest) -> Self {
        Self { request }
    }
}

#[async_trait]
impl AskMom for CallbackOrchestrator {
    fn style(&self) -> AsyncStyle {
        AsyncStyle::Callback
    }

    async fn run(&self, ctx: &RunContext) -> Result<RunState> {
        let outcome = self
            .request
            .outcome()
            .then(|settlement| async move {
                let phone = settlement?;
                ctx.phone_obtained()?;
                Ok::<_, OrchestratorError>(Some(DisplayLine::gift(&phone)))
            })
            .await;

        ctx.settle(outcome)
    }
}
