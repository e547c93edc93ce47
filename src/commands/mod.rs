//! Command implementations

pub mod autoplay;
pub mod interactive;

pub use autoplay::{AutoplayReport, AutoplayStep, run_autoplay};
pub use interactive::run_interactive;
