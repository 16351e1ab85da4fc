//! Sensor front-end implementations

pub mod adc;

pub use adc::{AdcReader, AdcSensor};
