mod display;
mod phone;
mod run;

pub use display::*;
pub use phone::*;
pub use run::*;
