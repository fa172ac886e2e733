use serde::{Deserialize, Serialize};
use std::fmt;

use super::phone::Phone;

pub const BEFORE_ASKING: &str = "before asking Mom";
pub const AFTER_ASKING: &str = "after asking mom";

/// One line of output on the display surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayLine(String);

impl DisplayLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// "Mom gives you a {color} {brand} phone"
    pub fn gift(phone: &Phone) -> Self {
        Self(format!("Mom gives you a {} {} phone", phone.color, phone.brand))
    }

    /// "Hey friend, I have a new {color} {brand} phone"
    pub fn show_off(phone: &Phone) -> Self {
        Self(format!(
            "Hey friend, I have a new {} {} phone",
            phone.color, phone.brand
        ))
    }

    pub fn before_asking() -> Self {
        Self::new(BEFORE_ASKING)
    }

    pub fn after_asking() -> Self {
        Self::new(AFTER_ASKING)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DisplayLine {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for DisplayLine {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<&str> for DisplayLine {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
