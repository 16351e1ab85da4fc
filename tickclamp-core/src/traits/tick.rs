//! Tick source trait

/// Source of elapsed milliseconds, e.g. a hardware timer interrupt
///
/// A source may coalesce several ticks between polls.
pub trait TickSource {
    /// Take the ticks accumulated since the last poll
    fn poll_ticks(&mut self) -> u16;
}
