//! Tick counter drivers

pub mod shared;

pub use shared::SharedTimer;
