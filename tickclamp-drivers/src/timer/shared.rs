//! Shared tick counter
//!
//! `TimerState` has no synchronization of its own. When the tick interrupt
//! and application code both need it, `SharedTimer` serializes every access
//! through a critical-section mutex. Readers see a consistent value and
//! never race with `tick`/`set`.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use tickclamp_core::timer::TimerState;
use tickclamp_core::traits::TickSource;

/// Tick counter that can live in a `static`
///
/// ```ignore
/// static TIMER: SharedTimer = SharedTimer::new();
///
/// // tick interrupt
/// TIMER.tick();
///
/// // application
/// let start = TIMER.now();
/// if TIMER.is_timeout(start, 500) { /* ... */ }
/// ```
pub struct SharedTimer {
    inner: Mutex<CriticalSectionRawMutex, RefCell<TimerState>>,
}

impl Default for SharedTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedTimer {
    /// Create a shared timer at 0
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(TimerState::new())),
        }
    }

    /// Run `f` with exclusive access to the timer
    pub fn lock<R>(&self, f: impl FnOnce(&mut TimerState) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Add one tick
    ///
    /// Returns true if the counter wrapped.
    pub fn tick(&self) -> bool {
        let wrapped = self.lock(|t| t.increment());

        #[cfg(feature = "defmt")]
        if wrapped {
            defmt::trace!("tick counter wrapped");
        }

        wrapped
    }

    /// Apply every tick pending in `source`
    ///
    /// Returns the number of ticks applied.
    pub fn pump<S: TickSource>(&self, source: &mut S) -> u16 {
        let ticks = source.poll_ticks();
        if ticks == 0 {
            return 0;
        }

        let wrapped = self.lock(|t| t.advance(ticks));

        #[cfg(feature = "defmt")]
        if wrapped {
            defmt::trace!("tick counter wrapped after {} ticks", ticks);
        }
        #[cfg(not(feature = "defmt"))]
        let _ = wrapped;

        ticks
    }

    /// Overwrite the counter
    pub fn set(&self, value: u16) {
        self.lock(|t| t.set(value));
    }

    /// Reset the counter to 0
    pub fn reset(&self) {
        self.lock(|t| t.init());
    }

    /// Current counter value
    pub fn now(&self) -> u16 {
        self.lock(|t| t.get())
    }

    /// Copy of the current timer state
    pub fn snapshot(&self) -> TimerState {
        self.lock(|t| *t)
    }

    /// Check whether `duration_ms` has passed since `start_ms`
    pub fn is_timeout(&self, start_ms: u16, duration_ms: u16) -> bool {
        self.lock(|t| t.is_timeout(start_ms, duration_ms))
    }
}
