//! Sensor front-end trait

/// Errors that can occur while sampling a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sample exceeds the converter's declared resolution
    OutOfRange,
    /// ADC conversion error
    Conversion,
}

/// Trait for sensors that produce clamped readings
///
/// Implementations sample their hardware and run the result through a
/// [`SensorClamp`](crate::sensor::SensorClamp).
pub trait SensorFrontEnd {
    /// Read an 8-bit reading clamped into the configured range
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_clamped(&mut self) -> Result<u8, SensorError>;

    /// Read the full-resolution sample mapped onto 0-255
    fn read_envelope(&mut self) -> Result<u8, SensorError>;

    /// Check whether the current reading is at or above the overheating threshold
    fn is_overheating(&mut self) -> Result<bool, SensorError>;
}
