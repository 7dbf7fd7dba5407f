//! Linear Re-mapping of Raw Converter Readings
//!
//! Integer linear interpolation in the style of the Arduino `map()` helper:
//!
//! ```text
//! out = (value - in_min) × (out_max - out_min) / (in_max - in_min) + out_min
//! ```
//!
//! Differences from the Arduino helper:
//! - The input is clamped to the input range, so out-of-range readings never
//!   extrapolate.
//! - Arithmetic runs in 128 bits; the product cannot overflow for `i32` bounds.
//! - Division truncates toward zero, exactly like the C `long` division the
//!   Arduino helper performs. A 0–1023 → 0–11 map therefore only reaches 11
//!   at the very top of the input range.

use crate::{
    constants::sensors::{ADC_RAW_MAX, ADC_RAW_MIN},
    errors::{ConfigError, ConfigResult},
};

/// Linearly re-map `value` from `[in_min, in_max]` onto `[out_min, out_max]`
///
/// The bounds may be given in either order; reversed output bounds produce a
/// decreasing map. Fails only when the input range is empty.
pub fn map_raw(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> ConfigResult<i32> {
    LinearMap::new(in_min, in_max, out_min, out_max).apply(value)
}

/// Const-constructible linear map between two integer ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LinearMap {
    /// Input value mapped to `out_min`
    pub in_min: i32,
    /// Input value mapped to `out_max`
    pub in_max: i32,
    /// Output for `in_min`
    pub out_min: i32,
    /// Output for `in_max`
    pub out_max: i32,
}

impl LinearMap {
    /// Create a map between two ranges
    pub const fn new(in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> Self {
        Self { in_min, in_max, out_min, out_max }
    }

    /// Map the full 10-bit ADC range onto `[0, out_max]`
    pub const fn from_adc(out_max: i32) -> Self {
        Self::new(ADC_RAW_MIN, ADC_RAW_MAX, 0, out_max)
    }

    /// Apply the map to `value`
    pub fn apply(&self, value: i32) -> ConfigResult<i32> {
        if self.in_min == self.in_max {
            return Err(ConfigError::EmptyInputRange {
                min: self.in_min,
                max: self.in_max,
            });
        }

        let low = self.in_min.min(self.in_max);
        let high = self.in_min.max(self.in_max);
        let clamped = value.clamp(low, high) as i128;

        let numerator = (clamped - self.in_min as i128) * (self.out_max as i128 - self.out_min as i128);
        let span = self.in_max as i128 - self.in_min as i128;

        // Clamped input keeps the result between out_min and out_max
        Ok((numerator / span + self.out_min as i128) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adc_to_uv_scale() {
        let uv = LinearMap::from_adc(11);

        assert_eq!(uv.apply(0), Ok(0));
        assert_eq!(uv.apply(1023), Ok(11));
        // 511 × 11 / 1023 = 5.49 → 5
        assert_eq!(uv.apply(511), Ok(5));
        // Just below full scale truncates down
        assert_eq!(uv.apply(1022), Ok(10));
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(map_raw(-40, 0, 1023, 0, 11), Ok(0));
        assert_eq!(map_raw(4095, 0, 1023, 0, 11), Ok(11));
    }

    #[test]
    fn reversed_output_range() {
        assert_eq!(map_raw(0, 0, 100, 50, 0), Ok(50));
        assert_eq!(map_raw(100, 0, 100, 50, 0), Ok(0));
        assert_eq!(map_raw(30, 0, 100, 50, 0), Ok(35));
    }

    #[test]
    fn reversed_input_range() {
        assert_eq!(map_raw(0, 100, 0, 0, 10), Ok(10));
        assert_eq!(map_raw(100, 100, 0, 0, 10), Ok(0));
    }

    #[test]
    fn negative_results_truncate_toward_zero() {
        // 5 clamps to 3, the top of the input range
        assert_eq!(map_raw(5, 0, 3, 0, -10), Ok(-10));
        // 1 × −10 / 3 = −3.33 → −3
        assert_eq!(map_raw(1, 0, 3, 0, -10), Ok(-3));
    }

    #[test]
    fn empty_input_range() {
        assert_eq!(
            map_raw(5, 7, 7, 0, 10),
            Err(ConfigError::EmptyInputRange { min: 7, max: 7 })
        );
    }

    #[test]
    fn extreme_bounds_do_not_overflow() {
        assert_eq!(map_raw(i32::MAX, i32::MIN, i32::MAX, i32::MIN, i32::MAX), Ok(i32::MAX));
        assert_eq!(map_raw(i32::MIN, i32::MIN, i32::MAX, i32::MIN, i32::MAX), Ok(i32::MIN));
    }
}
