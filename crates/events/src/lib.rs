//! Event system and output sink for the ask-mom demo
//!
//! This crate provides the event bus, the event types and the append-only
//! output sink that publishes every change on the bus.

mod bus;
mod sink;
mod types;

pub use bus::EventBus;
pub use sink::OutputSink;
pub use types::*;
