//! Trigger board: owns the output sink and the four orchestrators.
//!
//! Firing a trigger clears the sink, runs the orchestrator bound to it, and
//! returns a [`RunReport`].

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use askmom_core::{AsyncStyle, DecisionFlag, PhoneOffer};
use events::{Event, EventEnvelope, OutputSink};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::core::{AskMom, RunContext, RunReport};
use crate::error::{OrchestratorError, Result};
use crate::request::PhoneRequest;
use crate::variants::{
    ArrowOrchestrator, CallbackOrchestrator, ChainedOrchestrator, SequentialOrchestrator,
};

/// Settings the phone requests are built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    pub mood: DecisionFlag,
    /// How long a request takes to settle once first awaited
    pub latency: Duration,
}

impl EngineConfig {
    pub fn with_mood(mut self, mood: DecisionFlag) -> Self {
        self.mood = mood;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

pub struct TriggerBoard {
    config: EngineConfig,
    sink: OutputSink,
    orchestrators: BTreeMap<AsyncStyle, Arc<dyn AskMom>>,
}

impl TriggerBoard {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_sink(config, OutputSink::default())
    }

    pub fn with_sink(config: EngineConfig, sink: OutputSink) -> Self {
        let orchestrators = Self::wire(&config);
        Self {
            config,
            sink,
            orchestrators,
        }
    }

    /// Build the phone requests and bind an orchestrator to each trigger.
    ///
    /// run1, run2 and run3 share one request instance, so they observe the
    /// same settlement.
    fn wire(config: &EngineConfig) -> BTreeMap<AsyncStyle, Arc<dyn AskMom>> {
        let build = |offer| PhoneRequest::with_latency(offer, config.mood, config.latency);

        let gold_iphone = build(PhoneOffer::gold_iphone());
        let gold_iphone_terse = build(PhoneOffer::gold_iphone_terse());

        let mut orchestrators: BTreeMap<AsyncStyle, Arc<dyn AskMom>> = BTreeMap::new();
        orchestrators.insert(
            AsyncStyle::Callback,
            Arc::new(CallbackOrchestrator::new(gold_iphone.clone())),
        );
        orchestrators.insert(
            AsyncStyle::Chained,
            Arc::new(ChainedOrchestrator::new(gold_iphone.clone())),
        );
        orchestrators.insert(
            AsyncStyle::Arrow,
            Arc::new(ArrowOrchestrator::new(gold_iphone)),
        );
        orchestrators.insert(
            AsyncStyle::Sequential,
            Arc::new(SequentialOrchestrator::new(gold_iphone_terse)),
        );
        orchestrators
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The flag the current requests were decided with.
    pub fn mood(&self) -> DecisionFlag {
        self.config.mood
    }

    pub fn sink(&self) -> &OutputSink {
        &self.sink
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sink.bus().subscribe()
    }

    /// Replace every phone request with one decided by `mood`.
    ///
    /// This is the only way a mood change reaches the triggers; requests
    /// that already exist keep their settlement.
    pub fn rebuild(&mut self, mood: DecisionFlag) {
        self.config.mood = mood;
        self.orchestrators = Self::wire(&self.config);
        info!(mood = mood.as_str(), "Phone requests rebuilt");
    }

    /// Clear the sink and run the orchestrator bound to `style`.
    pub async fn fire(&self, style: AsyncStyle) -> Result<RunReport> {
        let orchestrator = self
            .orchestrators
            .get(&style)
            .ok_or_else(|| OrchestratorError::UnknownTrigger(style.trigger().to_string()))?;

        self.sink.clear();
        let ctx = RunContext::new(style, self.sink.clone());
        info!(
            run_id = %ctx.run_id(),
            trigger = style.trigger(),
            style = %style,
            "Trigger fired"
        );
        self.sink.bus().emit(Event::RunStarted {
            run_id: ctx.run_id(),
            style,
        });

        let state = match orchestrator.run(&ctx).await {
            Ok(state) => state,
            Err(e) => {
                // close the run on the bus with the state it stopped in
                let state = ctx.state();
                self.sink.bus().emit(Event::RunFinished {
                    run_id: ctx.run_id(),
                    style,
                    state,
                });
                warn!(
                    run_id = %ctx.run_id(),
                    trigger = style.trigger(),
                    state = %state,
                    error = %e,
                    "Run aborted"
                );
                return Err(e);
            }
        };

        self.sink.bus().emit(Event::RunFinished {
            run_id: ctx.run_id(),
            style,
            state,
        });
        info!(
            run_id = %ctx.run_id(),
            trigger = style.trigger(),
            state = %state,
            lines = self.sink.len(),
            "Run finished"
        );

        Ok(ctx.into_report())
    }

    /// Fire by trigger or style name (`run2`, `chained`, ...).
    pub async fn fire_named(&self, name: &str) -> Result<RunReport> {
        let style: AsyncStyle = name.parse()?;
        self.fire(style).await
    }

    /// Fire run1 through run4 in order.
    pub async fn fire_all(&self) -> Result<Vec<RunReport>> {
        let mut reports = Vec::with_capacity(AsyncStyle::ALL.len());
        for style in AsyncStyle::ALL {
            reports.push(self.fire(style).await?);
        }
        Ok(reports)
    }

    /// Fire on the runtime as an independent task and return immediately.
    ///
    /// The caller decides whether to wait for the report. Detached runs write
    /// to the board's single sink: a run fired while another is still in
    /// flight clears the sink, and the earlier run's report only holds the
    /// lines written after that clear.
    pub fn fire_detached(self: &Arc<Self>, style: AsyncStyle) -> JoinHandle<Result<RunReport>> {
        let board = Arc::clone(self);
        tokio::spawn(async move { board.fire(style).await })
    }

    /// Wait for a detached run, folding a panicked task into an error.
    pub async fn join(handle: JoinHandle<Result<RunReport>>) -> Result<RunReport> {
        handle
            .await
            .map_err(|e| OrchestratorError::TaskFailed(e.to_string()))?
    }
}

impl std::fmt::Debug for TriggerBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerBoard")
            .field("config", &self.config)
            .field("triggers", &self.orchestrators.keys().collect::<Vec<_>>())
            .field("sink", &self.sink)
            .finish()
    }
}
