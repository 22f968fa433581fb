//! Command implementations

mod clean;
mod play;

pub use clean::run_clean;
pub use play::run_play;
