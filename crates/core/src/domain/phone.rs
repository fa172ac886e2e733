use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

pub const REFUSAL_FORMAL: &str = "Mom is not happy.";
pub const REFUSAL_TERSE: &str = "mom is not happy";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub brand: String,
    pub color: String,
}

impl Phone {
    pub fn new(brand: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            color: color.into(),
        }
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.brand)
    }
}

/// What a phone request hands out: the phone when mom agrees, the refusal
/// message when she doesn't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneOffer {
    pub phone: Phone,
    pub refusal: String,
}

impl PhoneOffer {
    pub fn new(phone: Phone, refusal: impl Into<String>) -> Self {
        Self {
            phone,
            refusal: refusal.into(),
        }
    }

    pub fn gold_iphone() -> Self {
        Self::new(Phone::new("iPhone XR", "gold"), REFUSAL_FORMAL)
    }

    pub fn black_samsung() -> Self {
        Self::new(Phone::new("Samsung", "black"), REFUSAL_TERSE)
    }

    /// Same phone as [`PhoneOffer::gold_iphone`], refused with the terse message.
    pub fn gold_iphone_terse() -> Self {
        Self::new(Phone::new("iPhone XR", "gold"), REFUSAL_TERSE)
    }
}

/// Whether mom is happy. Read once when a phone request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionFlag(bool);

impl DecisionFlag {
    pub const fn happy() -> Self {
        Self(true)
    }

    pub const fn unhappy() -> Self {
        Self(false)
    }

    pub fn is_happy(&self) -> bool {
        self.0
    }

    pub fn as_str(&self) -> &'static str {
        if self.0 {
            "happy"
        } else {
            "unhappy"
        }
    }
}

impl Default for DecisionFlag {
    fn default() -> Self {
        Self::happy()
    }
}

impl From<bool> for DecisionFlag {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl FromStr for DecisionFlag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "happy" | "true" | "yes" => Ok(Self::happy()),
            "unhappy" | "false" | "no" => Ok(Self::unhappy()),
            other => Err(CoreError::InvalidMood(other.to_string())),
        }
    }
}
