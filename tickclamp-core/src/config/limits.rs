//! Sensor limit configuration
//!
//! The defaults reproduce the module constants in [`crate::sensor`].
//! With the `serde` feature the limits can be stored as postcard binary
//! data and validated on the way back in.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sensor::{
    validate_range, RangeCheck, READING_THRESHOLD, SCALE_SATURATION, SENSOR_MAX, SENSOR_MIN,
    TEMP_THRESHOLD,
};

/// Upper bound on the postcard-encoded size of [`SensorLimits`]
///
/// Four u8 fields plus a varint u16 (at most 3 bytes).
pub const LIMITS_MAX_ENCODED_LEN: usize = 7;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `sensor_min > sensor_max`
    InvertedRange,
    /// Scale saturation or reading threshold is zero
    ZeroDivisor,
    /// Failed to serialize
    Serialize,
    /// Failed to deserialize
    Deserialize,
}

/// Sensor clamp and scaling limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorLimits {
    /// Lowest clamped reading
    pub sensor_min: u8,
    /// Highest clamped reading
    pub sensor_max: u8,
    /// Overheating threshold (inclusive)
    pub temp_threshold: u8,
    /// 8-bit input that maps to full scale
    pub scale_saturation: u8,
    /// 16-bit reading above which the envelope saturates
    pub reading_threshold: u16,
}

impl Default for SensorLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SensorLimits {
    /// Limits matching the module constants
    pub const DEFAULT: Self = Self {
        sensor_min: SENSOR_MIN,
        sensor_max: SENSOR_MAX,
        temp_threshold: TEMP_THRESHOLD,
        scale_saturation: SCALE_SATURATION,
        reading_threshold: READING_THRESHOLD,
    };

    /// Check the limits are usable
    ///
    /// The temperature threshold is not checked against the clamp range;
    /// the overheating check runs on unclamped temperatures.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if validate_range(self.sensor_min, self.sensor_min, self.sensor_max)
            == RangeCheck::InvalidConfig
        {
            return Err(ConfigError::InvertedRange);
        }

        if self.scale_saturation == 0 || self.reading_threshold == 0 {
            return Err(ConfigError::ZeroDivisor);
        }

        Ok(())
    }

    /// Encode into `buf` as postcard binary data
    ///
    /// Returns the used prefix of `buf`.
    #[cfg(feature = "serde")]
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Decode postcard binary data and validate the result
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let limits: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        limits.validate()?;
        Ok(limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(SensorLimits::default(), SensorLimits::DEFAULT);
        assert_eq!(SensorLimits::DEFAULT.validate(), Ok(()));
    }

    #[test]
    fn test_inverted_range() {
        let limits = SensorLimits {
            sensor_min: 101,
            sensor_max: 100,
            ..SensorLimits::DEFAULT
        };
        assert_eq!(limits.validate(), Err(ConfigError::InvertedRange));
    }

    #[test]
    fn test_single_point_range_is_valid() {
        let limits = SensorLimits {
            sensor_min: 50,
            sensor_max: 50,
            ..SensorLimits::DEFAULT
        };
        assert_eq!(limits.validate(), Ok(()));
    }

    #[test]
    fn test_zero_divisor() {
        let limits = SensorLimits {
            scale_saturation: 0,
            ..SensorLimits::DEFAULT
        };
        assert_eq!(limits.validate(), Err(ConfigError::ZeroDivisor));

        let limits = SensorLimits {
            reading_threshold: 0,
            ..SensorLimits::DEFAULT
        };
        assert_eq!(limits.validate(), Err(ConfigError::ZeroDivisor));
    }

    #[test]
    fn test_threshold_outside_clamp_range_is_allowed() {
        let limits = SensorLimits {
            temp_threshold: 200,
            ..SensorLimits::DEFAULT
        };
        assert_eq!(limits.validate(), Ok(()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_postcard_encoding() {
        let limits = SensorLimits {
            sensor_min: 5,
            sensor_max: 95,
            temp_threshold: 70,
            scale_saturation: 180,
            reading_threshold: 4000,
        };

        let mut buf = [0u8; LIMITS_MAX_ENCODED_LEN];
        let used = limits.to_slice(&mut buf).unwrap().len();
        assert!(used <= LIMITS_MAX_ENCODED_LEN);

        assert_eq!(SensorLimits::from_bytes(&buf[..used]), Ok(limits));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_decode_rejects_invalid_limits() {
        let limits = SensorLimits {
            sensor_min: 90,
            sensor_max: 10,
            ..SensorLimits::DEFAULT
        };

        let mut buf = [0u8; LIMITS_MAX_ENCODED_LEN];
        let used = limits.to_slice(&mut buf).unwrap().len();
        assert_eq!(
            SensorLimits::from_bytes(&buf[..used]),
            Err(ConfigError::InvertedRange)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_decode_truncated() {
        assert_eq!(
            SensorLimits::from_bytes(&[1, 2]),
            Err(ConfigError::Deserialize)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_encode_buffer_too_small() {
        let mut buf = [0u8; 2];
        assert_eq!(
            SensorLimits::DEFAULT.to_slice(&mut buf).map(|b| b.len()),
            Err(ConfigError::Serialize)
        );
    }
}
