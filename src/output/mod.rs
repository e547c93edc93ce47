//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::print_autoplay_report;
pub use formatters::{colorize_guess, feedback_legend};
