//! Command implementations

pub mod check;
pub mod play;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use play::{DEFAULT_REVEAL_MS, PlayConfig};
pub use simple::run_simple;
