//! Domain types for the ask-mom demo: phones, offers, the decision flag,
//! display lines and run states.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::{CoreError, DecisionError};
