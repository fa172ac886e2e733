use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The asynchronous idiom a trigger demonstrates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AsyncStyle {
    /// Plain continuation on the request, no show-off step.
    Callback,
    /// Request chained into show-off, with lines written around the chain.
    Chained,
    /// The chained pipeline written with inline closures.
    Arrow,
    /// `async`/`await` in program order.
    Sequential,
}

impl AsyncStyle {
    pub const ALL: [AsyncStyle; 4] = [
        AsyncStyle::Callback,
        AsyncStyle::Chained,
        AsyncStyle::Arrow,
        AsyncStyle::Sequential,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Callback => "callback",
            Self::Chained => "chained",
            Self::Arrow => "arrow",
            Self::Sequential => "sequential",
        }
    }

    /// Name of the activation point bound to this style.
    pub fn trigger(&self) -> &'static str {
        match self {
            Self::Callback => "run1",
            Self::Chained => "run2",
            Self::Arrow => "run3",
            Self::Sequential => "run4",
        }
    }

    /// Accepts either the style name or the trigger name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "callback" | "run1" => Some(Self::Callback),
            "chained" | "run2" => Some(Self::Chained),
            "arrow" | "run3" => Some(Self::Arrow),
            "sequential" | "run4" => Some(Self::Sequential),
            _ => None,
        }
    }
}

impl fmt::Display for AsyncStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AsyncStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| CoreError::UnknownStyle(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    #[default]
    Pending,
    PhoneObtained,
    Succeeded,
    Failed,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::PhoneObtained => "phone_obtained",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
