//! Timer state
//!
//! Owned counter of elapsed milliseconds. There is no global instance;
//! whoever owns the `TimerState` is the single writer. Callers that share
//! one across contexts must serialize `increment`/`set` themselves.

/// Number of milliseconds before the counter returns to the same value
pub const WRAP_PERIOD_MS: u32 = 1 << 16;

/// Wrapping 16-bit millisecond counter
///
/// `increment` and `advance` wrap modulo 65536 (65535 + 1 == 0).
/// Elapsed time is the modular difference between the counter and a
/// start value, which stays correct across one wrap but cannot tell an
/// elapsed time of `n` from `n + 65536`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerState {
    /// Elapsed ticks (ms)
    elapsed_ticks: u16,
}

impl TimerState {
    /// Create a timer at 0
    pub const fn new() -> Self {
        Self { elapsed_ticks: 0 }
    }

    /// Create a timer at an arbitrary value
    pub const fn starting_at(value: u16) -> Self {
        Self {
            elapsed_ticks: value,
        }
    }

    /// Reset the counter to 0
    pub fn init(&mut self) {
        self.elapsed_ticks = 0;
    }

    /// Add one tick
    ///
    /// Returns true if the counter wrapped from 65535 to 0.
    pub fn increment(&mut self) -> bool {
        self.advance(1)
    }

    /// Add `ticks` at once, with the same wraparound as `increment`
    ///
    /// Returns true if the counter passed 65535 on the way.
    pub fn advance(&mut self, ticks: u16) -> bool {
        let (next, wrapped) = self.elapsed_ticks.overflowing_add(ticks);
        self.elapsed_ticks = next;
        wrapped
    }

    /// Copy of this timer advanced by one tick
    pub const fn incremented(self) -> Self {
        Self {
            elapsed_ticks: self.elapsed_ticks.wrapping_add(1),
        }
    }

    /// Overwrite the counter
    ///
    /// Used to resynchronize with an external clock or to put the timer
    /// into a specific (possibly post-wrap) state.
    pub fn set(&mut self, value: u16) {
        self.elapsed_ticks = value;
    }

    /// Current counter value
    pub const fn get(&self) -> u16 {
        self.elapsed_ticks
    }

    /// Ticks since `start_ms`, modulo 65536
    pub const fn elapsed_since(&self, start_ms: u16) -> u16 {
        self.elapsed_ticks.wrapping_sub(start_ms)
    }

    /// Check whether `duration_ms` has passed since `start_ms`
    ///
    /// Only meaningful while the true elapsed time is under one wrap
    /// period ([`WRAP_PERIOD_MS`]).
    pub const fn is_timeout(&self, start_ms: u16, duration_ms: u16) -> bool {
        self.elapsed_since(start_ms) >= duration_ms
    }
}
