//! ADC-backed sensor
//!
//! Samples an ADC channel and feeds the result through a `SensorClamp`.
//! The clamp works on 8-bit readings, so wider samples are shifted down
//! to their top 8 bits. The full-width sample is kept for the 16-bit
//! envelope.

use tickclamp_core::sensor::SensorClamp;
use tickclamp_core::traits::{SensorError, SensorFrontEnd};

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read a raw sample
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Sensor on an ADC channel of 8 to 16 bits resolution
pub struct AdcSensor<ADC> {
    adc: ADC,
    clamp: SensorClamp,
    /// ADC resolution in bits (8..=16)
    resolution_bits: u8,
}

impl<ADC> AdcSensor<ADC> {
    /// Create a new ADC sensor
    ///
    /// # Arguments
    /// - `adc`: ADC channel to sample
    /// - `clamp`: limits applied to every reading
    /// - `resolution_bits`: converter resolution, clamped to 8..=16
    pub fn new(adc: ADC, clamp: SensorClamp, resolution_bits: u8) -> Self {
        Self {
            adc,
            clamp,
            resolution_bits: resolution_bits.clamp(8, 16),
        }
    }

    /// Get the clamp in use
    pub fn clamp(&self) -> &SensorClamp {
        &self.clamp
    }

    /// Largest sample the converter can produce
    pub fn max_sample(&self) -> u16 {
        (u32::from(u16::MAX) >> (16 - self.resolution_bits)) as u16
    }

    /// Reject samples above the converter's resolution
    pub fn check_sample(&self, sample: u16) -> Result<u16, SensorError> {
        if sample > self.max_sample() {
            return Err(SensorError::OutOfRange);
        }
        Ok(sample)
    }

    /// Reduce a full-width sample to an 8-bit reading
    pub fn to_reading(&self, sample: u16) -> Result<u8, SensorError> {
        let sample = self.check_sample(sample)?;

        // Top 8 bits of the converter's range
        Ok((sample >> (self.resolution_bits - 8)) as u8)
    }
}

impl<ADC: AdcReader> AdcSensor<ADC> {
    /// Read a raw sample from the converter
    pub fn sample(&mut self) -> Result<u16, SensorError> {
        self.adc.read().map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("ADC read failed");
            SensorError::Conversion
        })
    }

    /// Read a sample and check it against the converter's resolution
    fn read_checked(&mut self) -> Result<u16, SensorError> {
        let sample = self.sample()?;
        self.check_sample(sample).inspect_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("ADC sample {} above {}-bit range", sample, self.resolution_bits);
        })
    }

    fn read_raw(&mut self) -> Result<u8, SensorError> {
        let sample = self.read_checked()?;
        self.to_reading(sample)
    }
}

impl<ADC: AdcReader> SensorFrontEnd for AdcSensor<ADC> {
    fn read_clamped(&mut self) -> Result<u8, SensorError> {
        let raw = self.read_raw()?;
        Ok(self.clamp.read(raw))
    }

    fn read_envelope(&mut self) -> Result<u8, SensorError> {
        let sample = self.read_checked()?;
        Ok(self.clamp.envelope(sample))
    }

    /// Checks the unclamped reading, so a threshold above `sensor_max`
    /// still fires
    fn is_overheating(&mut self) -> Result<bool, SensorError> {
        let raw = self.read_raw()?;
        Ok(self.clamp.is_overheating(raw))
    }
}

/// Dummy ADC for testing (returns a fixed value)
#[cfg(test)]
pub struct DummyAdc(pub Option<u16>);

#[cfg(test)]
impl AdcReader for DummyAdc {
    fn read(&mut self) -> Result<u16, ()> {
        self.0.ok_or(())
    }
}
