//! Board-agnostic core logic for bounded sensor readings and tick timing
//!
//! This crate contains all logic that does not depend on specific
//! hardware implementations:
//!
//! - Sensor clamping, scaling and threshold classification
//! - Range validation
//! - Wrap-aware 16-bit millisecond timer
//! - Boundary catalog for the public functions
//! - Sensor limit configuration
//! - Hardware abstraction traits (sensor front end, tick source)
//!
//! Every value keeps its declared width. Where arithmetic would leave that
//! width it wraps modulo 2^width, using explicit `wrapping_*` operations.

#![no_std]
#![deny(unsafe_code)]

pub mod boundary;
pub mod config;
pub mod sensor;
pub mod timer;
pub mod traits;
