use askmom_core::{AsyncStyle, RunState};
use async_trait::async_trait;
use futures::future::{self, FutureExt, TryFutureExt};

use crate::core::{AskMom, RunContext};
use crate::error::{OrchestratorError, Result};
use crate::request::PhoneRequest;
use crate::show_off::show_off;

/// The request/show-off chain with every step written inline.
pub struct ArrowOrchestrator {
    request: PhoneRequest,
}

impl ArrowOrchestrator {
    pub fn new(request: PhoneRequest) -> Self {
        Self { request }
    }
}

#[async_trait]
impl AskMom for ArrowOrchestrator {
    fn style(&self) -> AsyncStyle {
        AsyncStyle::Arrow
    }

    async fn run(&self, ctx: &RunContext) -> Result<RunState> {
        let outcome = self
            .request
            .outcome()
            .map_err(OrchestratorError::from)
            .and_then(|phone| future::ready(ctx.phone_obtained().map(|()| phone)))
            .and_then(|phone| show_off(&phone).map(|line| Ok(Some(line))))
            .await;

        ctx.settle(outcome)
    }
}
