//! Shared range checks for profile validation
//!
//! Pure functions, no allocation. Every check names the field it guards so
//! the resulting [`ConfigError`] points straight at the bad preset entry.

use crate::errors::{ConfigError, ConfigResult};

/// Check that `values` are finite and non-decreasing
pub(crate) fn ascending(field: &'static str, values: &[f32]) -> ConfigResult<()> {
    for value in values {
        if !value.is_finite() {
            return Err(ConfigError::NotFinite { field });
        }
    }
    for pair in values.windows(2) {
        if pair[0] > pair[1] {
            return Err(ConfigError::InvertedRange { field, min: pair[0], max: pair[1] });
        }
    }
    Ok(())
}

/// Check that `value` is finite and inside `[min, max]`
///
/// The error reports the violated pair: `value` against `min` when too low,
/// `value` against `max` when too high.
pub(crate) fn within(field: &'static str, value: f32, min: f32, max: f32) -> ConfigResult<()> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value < min {
        return Err(ConfigError::InvertedRange { field, min, max: value });
    }
    if value > max {
        return Err(ConfigError::InvertedRange { field, min: value, max });
    }
    Ok(())
}

/// Check that `value` is finite
pub(crate) fn finite(field: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_accepts_equal_neighbours() {
        assert!(ascending("t", &[1.0, 1.0, 2.0]).is_ok());
        assert!(ascending("t", &[]).is_ok());
    }

    #[test]
    fn ascending_reports_first_inversion() {
        assert_eq!(
            ascending("t", &[1.0, 3.0, 2.0, 0.0]),
            Err(ConfigError::InvertedRange { field: "t", min: 3.0, max: 2.0 })
        );
        assert_eq!(ascending("t", &[1.0, f32::NAN]), Err(ConfigError::NotFinite { field: "t" }));
    }

    #[test]
    fn within_bounds() {
        assert!(within("v", 5.0, 0.0, 10.0).is_ok());
        assert_eq!(
            within("v", -1.0, 0.0, 10.0),
            Err(ConfigError::InvertedRange { field: "v", min: 0.0, max: -1.0 })
        );
        assert_eq!(
            within("v", 11.0, 0.0, 10.0),
            Err(ConfigError::InvertedRange { field: "v", min: 11.0, max: 10.0 })
        );
        assert!(finite("v", f32::INFINITY).is_err());
    }
}
