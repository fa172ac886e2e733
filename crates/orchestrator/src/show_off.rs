//! Turning a phone into something to brag about. Both forms produce the same
//! line; they differ only in how the future is built.

use askmom_core::{DisplayLine, Phone};
use futures::future::{self, Ready};

/// Explicitly resolved: hands back a future that is already complete.
pub fn show_off(phone: &Phone) -> Ready<DisplayLine> {
    future::ready(DisplayLine::show_off(phone))
}

/// Implicitly resolved: the `async fn` body's return value becomes the output.
pub async fn show_off_async(phone: Phone) -> DisplayLine {
    DisplayLine::show_off(&phone)
}
