//! Boundary catalog
//!
//! Lists, for every public function, the values a test suite has to probe:
//! the limits of each input's integer width, one step past them, and the
//! declared thresholds with their neighbours. External coverage tools read
//! this catalog instead of guessing boundaries from the source.
//!
//! Probe values are plain `i64` so that out-of-width values such as -1,
//! 256 or 65536 can be expressed. [`wrap_u8`] and [`wrap_u16`] reduce them
//! to the width the function actually receives.

use heapless::Vec;

use crate::sensor::{
    READING_THRESHOLD, SCALE_SATURATION, SENSOR_MAX, SENSOR_MIN, TEMP_THRESHOLD,
};

/// Maximum number of distinct probes for one subject
pub const MAX_PROBES: usize = 16;

/// Fixed integer width of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Width {
    /// 8-bit unsigned
    U8,
    /// 16-bit unsigned
    U16,
}

impl Width {
    /// Smallest representable value
    pub const fn min(self) -> i64 {
        0
    }

    /// Largest representable value
    pub const fn max(self) -> i64 {
        match self {
            Width::U8 => u8::MAX as i64,
            Width::U16 => u16::MAX as i64,
        }
    }

    /// Reduce `value` modulo 2^width
    pub const fn wrap(self, value: i64) -> i64 {
        value.rem_euclid(self.max() + 1)
    }

    /// `[min - 1, min, max, max + 1]`
    pub const fn probes(self) -> [i64; 4] {
        [self.min() - 1, self.min(), self.max(), self.max() + 1]
    }
}

/// A declared threshold inside a function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Threshold {
    /// Constant name
    pub name: &'static str,
    /// Threshold value
    pub value: i64,
}

impl Threshold {
    /// `[value - 1, value, value + 1]`
    pub const fn probes(&self) -> [i64; 3] {
        [self.value - 1, self.value, self.value + 1]
    }
}

/// Boundary description of one public function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Subject {
    /// Function name
    pub name: &'static str,
    /// Width of each integer input, in parameter order
    pub inputs: &'static [Width],
    /// Declared thresholds
    pub thresholds: &'static [Threshold],
}

impl Subject {
    /// Sorted, distinct probe values for this function
    pub fn probes(&self) -> Vec<i64, MAX_PROBES> {
        let mut probes: Vec<i64, MAX_PROBES> = Vec::new();

        let widths = self.inputs.iter().flat_map(|w| w.probes());
        let thresholds = self.thresholds.iter().flat_map(|t| t.probes());

        for value in widths.chain(thresholds) {
            if probes.contains(&value) {
                continue;
            }
            if probes.push(value).is_err() {
                break;
            }
        }

        probes.sort_unstable();
        probes
    }

    /// Check if `value` is one of this function's probes
    pub fn is_probe(&self, value: i64) -> bool {
        self.probes().contains(&value)
    }
}

const ZERO: Threshold = Threshold {
    name: "ZERO",
    value: 0,
};

/// Catalog of every public function
pub const SUBJECTS: &[Subject] = &[
    Subject {
        name: "read_sensor",
        inputs: &[Width::U8],
        thresholds: &[
            Threshold {
                name: "SENSOR_MIN",
                value: SENSOR_MIN as i64,
            },
            Threshold {
                name: "SENSOR_MAX",
                value: SENSOR_MAX as i64,
            },
        ],
    },
    Subject {
        name: "is_overheating",
        inputs: &[Width::U8],
        thresholds: &[Threshold {
            name: "TEMP_THRESHOLD",
            value: TEMP_THRESHOLD as i64,
        }],
    },
    Subject {
        name: "scale_value",
        inputs: &[Width::U8],
        thresholds: &[
            ZERO,
            Threshold {
                name: "SCALE_SATURATION",
                value: SCALE_SATURATION as i64,
            },
        ],
    },
    Subject {
        name: "process_reading",
        inputs: &[Width::U16],
        thresholds: &[
            ZERO,
            Threshold {
                name: "READING_THRESHOLD",
                value: READING_THRESHOLD as i64,
            },
        ],
    },
    Subject {
        name: "validate_range",
        inputs: &[Width::U8, Width::U8, Width::U8],
        thresholds: &[],
    },
    Subject {
        name: "timer",
        inputs: &[Width::U16],
        thresholds: &[],
    },
    Subject {
        name: "is_timeout",
        inputs: &[Width::U16, Width::U16],
        thresholds: &[],
    },
];

/// Look up a function in [`SUBJECTS`]
pub fn subject(name: &str) -> Option<&'static Subject> {
    SUBJECTS.iter().find(|s| s.name == name)
}

/// Reduce an arbitrary integer to `u8`, modulo 256
pub const fn wrap_u8(value: i64) -> u8 {
    Width::U8.wrap(value) as u8
}

/// Reduce an arbitrary integer to `u16`, modulo 65536
pub const fn wrap_u16(value: i64) -> u16 {
    Width::U16.wrap(value) as u16
}
