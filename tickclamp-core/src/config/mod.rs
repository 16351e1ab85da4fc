//! Configuration types
//!
//! Sensor limits, with an optional postcard encoding for persistence.

pub mod limits;

pub use limits::*;
