//! Sensor clamping and scaling
//!
//! Integer-only transforms from raw 8-bit and 16-bit readings into the
//! ranges the rest of the system works with.

use crate::config::SensorLimits;

/// Lowest value a clamped reading can take
pub const SENSOR_MIN: u8 = 0;

/// Highest value a clamped reading can take
pub const SENSOR_MAX: u8 = 100;

/// Temperature at or above which the sensor reports overheating
pub const TEMP_THRESHOLD: u8 = 80;

/// Input at or above which `scale_value` saturates
pub const SCALE_SATURATION: u8 = 200;

/// 16-bit readings above this saturate the envelope output
pub const READING_THRESHOLD: u16 = 1000;

/// Full-scale output of the scaling functions
pub const OUTPUT_MAX: u8 = u8::MAX;

/// Sensor clamp with configurable limits
///
/// [`SensorClamp::DEFAULT`] uses the module constants and is what the
/// free functions delegate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorClamp {
    limits: SensorLimits,
}

impl Default for SensorClamp {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SensorClamp {
    /// Clamp built from the module constants
    pub const DEFAULT: Self = Self::new(SensorLimits::DEFAULT);

    /// Create a clamp from a set of limits
    ///
    /// The limits are taken as-is. Run [`SensorLimits::validate`] first
    /// when they come from outside the program.
    pub const fn new(limits: SensorLimits) -> Self {
        Self { limits }
    }

    /// Limits this clamp was built from
    pub const fn limits(&self) -> &SensorLimits {
        &self.limits
    }

    /// Clamp a raw reading into `[sensor_min, sensor_max]`
    ///
    /// The upper bound is checked first. With the default limits the
    /// lower branch can never fire because `sensor_min` is 0.
    pub const fn read(&self, raw: u8) -> u8 {
        if raw > self.limits.sensor_max {
            self.limits.sensor_max
        } else if raw < self.limits.sensor_min {
            self.limits.sensor_min
        } else {
            raw
        }
    }

    /// Check whether a temperature is at or above the threshold
    pub const fn is_overheating(&self, temperature: u8) -> bool {
        temperature >= self.limits.temp_threshold
    }

    /// Scale an 8-bit input onto the full 0-255 output
    ///
    /// `input * 255 / scale_saturation`, truncated. Inputs at or above the
    /// saturation point return 255. Zero maps to zero.
    pub const fn scale(&self, input: u8) -> u8 {
        if input == 0 {
            0
        } else if input >= self.limits.scale_saturation {
            OUTPUT_MAX
        } else {
            // input < saturation, so the quotient stays below 255
            (input as u32 * OUTPUT_MAX as u32 / self.limits.scale_saturation as u32) as u8
        }
    }

    /// Map a 16-bit reading onto 0-255
    ///
    /// Readings above `reading_threshold` saturate to 255. A reading equal
    /// to the threshold is not saturation, it scales to exactly 255.
    pub const fn envelope(&self, reading: u16) -> u8 {
        if reading == 0 {
            0
        } else if reading > self.limits.reading_threshold {
            OUTPUT_MAX
        } else {
            // 65535 * 255 fits in u32
            (reading as u32 * OUTPUT_MAX as u32 / self.limits.reading_threshold as u32) as u8
        }
    }
}

/// Clamp a raw reading into `[SENSOR_MIN, SENSOR_MAX]`
pub const fn read_sensor(raw: u8) -> u8 {
    SensorClamp::DEFAULT.read(raw)
}

/// Check whether `temperature >= TEMP_THRESHOLD`
pub const fn is_overheating(temperature: u8) -> bool {
    SensorClamp::DEFAULT.is_overheating(temperature)
}

/// Scale `input` so that `SCALE_SATURATION` and above map to 255
pub const fn scale_value(input: u8) -> u8 {
    SensorClamp::DEFAULT.scale(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_sensor_clamps_upper() {
        assert_eq!(read_sensor(255), 100);
        assert_eq!(read_sensor(101), 100);
        assert_eq!(read_sensor(100), 100);
        assert_eq!(read_sensor(99), 99);
        assert_eq!(read_sensor(0), 0);
    }

    #[test]
    fn test_overheating_threshold_inclusive() {
        assert!(!is_overheating(0));
        assert!(!is_overheating(79));
        assert!(is_overheating(80));
        assert!(is_overheating(81));
        assert!(is_overheating(255));
    }

    #[test]
    fn test_scale_value_truncates() {
        assert_eq!(scale_value(0), 0);
        // 1 * 255 / 200 = 1.275
        assert_eq!(scale_value(1), 1);
        // 100 * 255 / 200 = 127.5
        assert_eq!(scale_value(100), 127);
        // 199 * 255 / 200 = 253.725
        assert_eq!(scale_value(199), 253);
        assert_eq!(scale_value(200), 255);
        assert_eq!(scale_value(254), 255);
        assert_eq!(scale_value(255), 255);
    }

    #[test]
    fn test_envelope_threshold() {
        let clamp = SensorClamp::DEFAULT;
        assert_eq!(clamp.envelope(0), 0);
        assert_eq!(clamp.envelope(1), 0);
        assert_eq!(clamp.envelope(4), 1);
        // 999 * 255 / 1000 = 254.745
        assert_eq!(clamp.envelope(999), 254);
        assert_eq!(clamp.envelope(1000), 255);
        assert_eq!(clamp.envelope(1001), 255);
        assert_eq!(clamp.envelope(u16::MAX), 255);
    }

    #[test]
    fn test_custom_limits_lower_clamp() {
        let clamp = SensorClamp::new(SensorLimits {
            sensor_min: 20,
            sensor_max: 60,
            ..SensorLimits::DEFAULT
        });

        assert_eq!(clamp.read(0), 20);
        assert_eq!(clamp.read(19), 20);
        assert_eq!(clamp.read(20), 20);
        assert_eq!(clamp.read(45), 45);
        assert_eq!(clamp.read(61), 60);
    }

    #[test]
    fn test_custom_saturation() {
        let clamp = SensorClamp::new(SensorLimits {
            scale_saturation: 100,
            reading_threshold: 500,
            ..SensorLimits::DEFAULT
        });

        assert_eq!(clamp.scale(50), 127);
        assert_eq!(clamp.scale(100), 255);
        assert_eq!(clamp.envelope(500), 255);
        assert_eq!(clamp.envelope(250), 127);
    }

    #[test]
    fn test_zero_divisors_do_not_divide() {
        let clamp = SensorClamp::new(SensorLimits {
            scale_saturation: 0,
            reading_threshold: 0,
            ..SensorLimits::DEFAULT
        });

        assert_eq!(clamp.scale(0), 0);
        assert_eq!(clamp.scale(1), 255);
        assert_eq!(clamp.envelope(0), 0);
        assert_eq!(clamp.envelope(1), 255);
    }

    #[test]
    fn test_default_matches_constants() {
        assert_eq!(SensorClamp::default(), SensorClamp::DEFAULT);
        assert_eq!(SensorClamp::DEFAULT.limits().sensor_max, SENSOR_MAX);
        assert_eq!(SensorClamp::DEFAULT.limits().sensor_min, SENSOR_MIN);
    }
}
