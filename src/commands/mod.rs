//! Command implementations

pub mod check;
pub mod play;

pub use check::{CheckResult, CheckStep, check_guesses};
pub use play::{Statistics, run_play};
