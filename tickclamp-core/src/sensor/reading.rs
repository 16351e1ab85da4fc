//! 16-bit reading envelope
//!
//! Maps a 16-bit reading into an 8-bit output slot. The caller supplies
//! the slot; an absent slot is the only failure.

use super::clamp::SensorClamp;

/// Status code for a successful `process_reading`
pub const STATUS_OK: i32 = 0;

/// Errors from processing a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadingError {
    /// No output slot was supplied
    InvalidArgument,
}

impl ReadingError {
    /// Distinguished integer code for this error
    pub const fn code(self) -> i32 {
        match self {
            ReadingError::InvalidArgument => -1,
        }
    }
}

/// Convert a `process_reading` result to its integer status code
///
/// `Ok` is [`STATUS_OK`], errors use [`ReadingError::code`].
pub fn status_code(result: Result<(), ReadingError>) -> i32 {
    match result {
        Ok(()) => STATUS_OK,
        Err(e) => e.code(),
    }
}

/// Write the 8-bit envelope of `reading` into `output`
///
/// - no slot: `Err(InvalidArgument)`, nothing written
/// - `0`: writes 0
/// - above 1000: writes 255
/// - otherwise writes `reading * 255 / 1000`, truncated
pub fn process_reading(reading: u16, output: Option<&mut u8>) -> Result<(), ReadingError> {
    let slot = output.ok_or(ReadingError::InvalidArgument)?;
    *slot = SensorClamp::DEFAULT.envelope(reading);
    Ok(())
}

/// Envelope of `reading` without an output slot
pub const fn envelope(reading: u16) -> u8 {
    SensorClamp::DEFAULT.envelope(reading)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slot_is_invalid_argument() {
        for reading in [0, 1, 999, 1000, 1001, u16::MAX] {
            let result = process_reading(reading, None);
            assert_eq!(result, Err(ReadingError::InvalidArgument));
            assert_eq!(status_code(result), -1);
        }
    }

    #[test]
    fn test_zero_reading() {
        let mut out = 0xAA;
        assert_eq!(process_reading(0, Some(&mut out)), Ok(()));
        assert_eq!(out, 0);
    }

    #[test]
    fn test_threshold_is_not_saturation() {
        let mut out = 0;
        let result = process_reading(1000, Some(&mut out));
        assert_eq!(status_code(result), STATUS_OK);
        assert_eq!(out, 255);

        process_reading(999, Some(&mut out)).unwrap();
        assert!(out < 255);
        assert_eq!(out, 254);
    }

    #[test]
    fn test_saturation_above_threshold() {
        let mut out = 0;
        process_reading(1001, Some(&mut out)).unwrap();
        assert_eq!(out, 255);

        process_reading(u16::MAX, Some(&mut out)).unwrap();
        assert_eq!(out, 255);
    }

    #[test]
    fn test_midrange() {
        let mut out = 0;
        // 500 * 255 / 1000 = 127.5
        process_reading(500, Some(&mut out)).unwrap();
        assert_eq!(out, 127);
        assert_eq!(envelope(500), 127);
    }
}
