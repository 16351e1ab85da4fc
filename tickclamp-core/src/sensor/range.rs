//! Range validation

/// Result of checking a value against `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangeCheck {
    /// `min > max`, the range itself is unusable
    InvalidConfig,
    /// Value lies below `min` or above `max`
    OutOfRange,
    /// `min <= value <= max`
    InRange,
}

impl RangeCheck {
    /// Integer code: -1 invalid range, 0 out of range, 1 in range
    pub const fn code(self) -> i32 {
        match self {
            RangeCheck::InvalidConfig => -1,
            RangeCheck::OutOfRange => 0,
            RangeCheck::InRange => 1,
        }
    }

    /// Check if the value was inside the range
    pub const fn is_in_range(self) -> bool {
        matches!(self, RangeCheck::InRange)
    }
}

/// Check `value` against the inclusive range `[min, max]`
///
/// An inverted range is reported before the value is looked at.
pub const fn validate_range(value: u8, min: u8, max: u8) -> RangeCheck {
    if min > max {
        return RangeCheck::InvalidConfig;
    }
    if value < min || value > max {
        return RangeCheck::OutOfRange;
    }
    RangeCheck::InRange
}
