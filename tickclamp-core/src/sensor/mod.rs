//! Sensor reading transformation
//!
//! Stateless clamping, scaling and classification of raw sensor values.

pub mod clamp;
pub mod range;
pub mod reading;

pub use clamp::{
    is_overheating, read_sensor, scale_value, SensorClamp, OUTPUT_MAX, READING_THRESHOLD,
    SCALE_SATURATION, SENSOR_MAX, SENSOR_MIN, TEMP_THRESHOLD,
};
pub use range::{validate_range, RangeCheck};
pub use reading::{envelope, process_reading, status_code, ReadingError, STATUS_OK};
