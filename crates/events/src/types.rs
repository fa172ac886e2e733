//! Event types published while triggers run

use askmom_core::{AsyncStyle, DisplayLine, RunState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope wrapping all events with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// The actual event
    pub event: Event,
}

impl EventEnvelope {
    /// Create a new event envelope with auto-generated ID and timestamp
    pub fn new(event: Event) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// All possible events in the system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    // Output events
    /// A line was appended to the output sink
    #[serde(rename = "output.line")]
    OutputLine { sequence: u64, line: DisplayLine },

    /// The output sink was truncated
    #[serde(rename = "output.cleared")]
    OutputCleared,

    // Run events
    /// A trigger fired and its orchestrator started
    #[serde(rename = "run.started")]
    RunStarted { run_id: Uuid, style: AsyncStyle },

    /// A run moved between states
    #[serde(rename = "run.state_changed")]
    RunStateChanged {
        run_id: Uuid,
        from: RunState,
        to: RunState,
    },

    /// A run reached a terminal state
    #[serde(rename = "run.finished")]
    RunFinished {
        run_id: Uuid,
        style: AsyncStyle,
        state: RunState,
    },
}

impl Event {
    /// Get the run ID associated with this event, if any
    pub fn run_id(&self) -> Option<Uuid> {
        match self {
            Event::RunStarted { run_id, .. } => Some(*run_id),
            Event::RunStateChanged { run_id, .. } => Some(*run_id),
            Event::RunFinished { run_id, .. } => Some(*run_id),
            Event::OutputLine { .. } | Event::OutputCleared => None,
        }
    }
}
