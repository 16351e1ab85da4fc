//! Millisecond tick timer
//!
//! A single 16-bit counter that wraps at 65535. Timeouts are computed
//! from the modular difference between the counter and a recorded start.

pub mod state;

pub use state::{TimerState, WRAP_PERIOD_MS};
