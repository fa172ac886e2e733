use anyhow::Result;
use colored::Colorize;
use events::EventEnvelope;
use orchestrator::RunReport;
use tokio::sync::broadcast::{self, error::TryRecvError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    /// One serialized event envelope per line
    Json,
}

/// Prints what the board published while a trigger ran.
pub struct Renderer {
    format: OutputFormat,
    events: broadcast::Receiver<EventEnvelope>,
}

impl Renderer {
    pub fn new(format: OutputFormat, events: broadcast::Receiver<EventEnvelope>) -> Self {
        Self { format, events }
    }

    pub fn report(&mut self, report: &RunReport) -> Result<()> {
        let envelopes = self.drain();
        match self.format {
            OutputFormat::Json => {
                for envelope in &envelopes {
                    println!("{}", serde_json::to_string(envelope)?);
                }
            }
            OutputFormat::Text => print_text(report),
        }
        Ok(())
    }

    /// Print the sink contents outside of a run.
    pub fn lines(&mut self, lines: &[askmom_core::DisplayLine]) {
        self.drain();
        if lines.is_empty() {
            println!("  {}", "(empty)".dimmed());
        }
        for line in lines {
            println!("  {}", line);
        }
    }

    fn drain(&mut self) -> Vec<EventEnvelope> {
        let mut envelopes = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(envelope) => envelopes.push(envelope),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Renderer fell behind the event bus");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        envelopes
    }
}

fn print_text(report: &RunReport) {
    println!(
        "{} {}",
        report.style.trigger().bold(),
        format!("({})", report.style).dimmed()
    );
    for line in &report.lines {
        println!("  {}", line);
    }

    let path = report
        .transitions
        .iter()
        .map(|state| state.as_str())
        .collect::<Vec<_>>()
        .join(" → ");
    let state = if report.succeeded() {
        report.state.as_str().green()
    } else {
        report.state.as_str().red()
    };
    println!("  {} {}", state, format!("[{}]", path).dimmed());
    println!();
}
