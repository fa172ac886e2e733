//! Append-only output surface.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use askmom_core::DisplayLine;
use tracing::trace;

use crate::bus::EventBus;
use crate::types::Event;

/// Display surface that accumulates lines until cleared.
///
/// Every append and every clear is also published on the event bus. Lines
/// carry a sequence number that keeps increasing across clears, so
/// subscribers can order output from several runs.
#[derive(Clone, Debug)]
pub struct OutputSink {
    lines: Arc<RwLock<Vec<DisplayLine>>>,
    sequence: Arc<AtomicU64>,
    bus: EventBus,
}

impl OutputSink {
    pub fn new(bus: EventBus) -> Self {
        Self {
            lines: Arc::new(RwLock::new(Vec::new())),
            sequence: Arc::new(AtomicU64::new(0)),
            bus,
        }
    }

    /// Append a line.
    ///
    /// The sequence number is taken and the event published under the write
    /// lock, so sequence order, line order and bus order always agree.
    pub fn output(&self, line: impl Into<DisplayLine>) {
        let line = line.into();
        let mut lines = self.lines.write().unwrap_or_else(PoisonError::into_inner);
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst);
        trace!(sequence, line = %line, "Output line");

        lines.push(line.clone());
        self.bus.emit(Event::OutputLine { sequence, line });
    }

    /// Truncate the surface to empty.
    pub fn clear(&self) {
        let mut lines = self.lines.write().unwrap_or_else(PoisonError::into_inner);
        lines.clear();
        self.bus.emit(Event::OutputCleared);
    }

    /// Snapshot of the current lines, oldest first.
    pub fn lines(&self) -> Vec<DisplayLine> {
        self.lines
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lines.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }
}

impl Default for OutputSink {
    fn default() -> Self {
        Self::new(EventBus::new())
    }
}
