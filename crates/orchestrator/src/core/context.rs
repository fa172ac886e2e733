//! Per-run state shared by an orchestrator and the trigger that started it.

use std::sync::{Mutex, PoisonError};

use askmom_core::{AsyncStyle, DisplayLine, RunState};
use events::{Event, OutputSink};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::{OrchestratorError, Result};
use crate::state_machine::RunStateMachine;

/// Outcome of one trigger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub style: AsyncStyle,
    /// Terminal state the run ended in
    pub state: RunState,
    /// Every state visited, starting with `pending`
    pub transitions: Vec<RunState>,
    /// Sink contents when the run finished
    pub lines: Vec<DisplayLine>,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        self.state == RunState::Succeeded
    }
}

/// Execution context handed to [`AskMom::run`](super::AskMom::run).
///
/// Tracks the run's state machine and writes to the output sink. Every
/// transition is validated, logged, and published on the sink's bus.
pub struct RunContext {
    run_id: Uuid,
    style: AsyncStyle,
    sink: OutputSink,
    visited: Mutex<Vec<RunState>>,
}

impl RunContext {
    pub fn new(style: AsyncStyle, sink: OutputSink) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            style,
            sink,
            visited: Mutex::new(vec![RunState::Pending]),
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn style(&self) -> AsyncStyle {
        self.style
    }

    pub fn sink(&self) -> &OutputSink {
        &self.sink
    }

    pub fn output(&self, line: impl Into<DisplayLine>) {
        self.sink.output(line);
    }

    /// Current state of the run.
    pub fn state(&self) -> RunState {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .copied()
            .unwrap_or_default()
    }

    pub fn advance(&self, to: RunState) -> Result<()> {
        let from = {
            let mut visited = self.visited.lock().unwrap_or_else(PoisonError::into_inner);
            let from = visited.last().copied().unwrap_or_default();
            RunStateMachine::validate_transition(&from, &to)?;
            visited.push(to);
            from
        };

        debug!(
            run_id = %self.run_id,
            style = %self.style,
            from = %from,
            to = %to,
            terminal = to.is_terminal(),
            "Run state changed"
        );
        self.sink.bus().emit(Event::RunStateChanged {
            run_id: self.run_id,
            from,
            to,
        });
        Ok(())
    }

    /// The request settled with a phone.
    pub fn phone_obtained(&self) -> Result<()> {
        self.advance(RunState::PhoneObtained)
    }

    /// Error boundary shared by every orchestrator.
    ///
    /// A successful pipeline writes its final line (if it has one left to
    /// write) and succeeds. A refusal writes the refusal message and fails the
    /// run. Anything else is not a business outcome and propagates.
    pub fn settle(&self, outcome: Result<Option<DisplayLine>>) -> Result<RunState> {
        match outcome {
            Ok(line) => {
                if let Some(line) = line {
                    self.output(line);
                }
                self.advance(RunState::Succeeded)?;
                Ok(RunState::Succeeded)
            }
            Err(OrchestratorError::Declined(reason)) => {
                self.output(reason.message);
                self.advance(RunState::Failed)?;
                Ok(RunState::Failed)
            }
            Err(other) => Err(other),
        }
    }

    pub fn into_report(self) -> RunReport {
        let transitions = self
            .visited
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        RunReport {
            run_id: self.run_id,
            style: self.style,
            state: transitions.last().copied().unwrap_or_default(),
            transitions,
            lines: self.sink.lines(),
        }
    }
}
