//! Hardware abstraction traits
//!
//! These traits define the interface between the core logic and
//! hardware-specific implementations.

pub mod sensor;
pub mod tick;

pub use sensor::{SensorError, SensorFrontEnd};
pub use tick::TickSource;
