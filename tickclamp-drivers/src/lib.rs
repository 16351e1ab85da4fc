//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tickclamp-core:
//!
//! - ADC-backed sensor front end
//! - Shared tick counter, serialized behind a critical-section mutex

#![no_std]
#![deny(unsafe_code)]

pub mod sensor;
pub mod timer;
