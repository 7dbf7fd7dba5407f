//! Alert thresholds and calibration offsets
//!
//! Readings arrive from the driver layer already converted to °C, %RH and hPa.
//! Offsets are added first, then the corrected reading is compared against
//! the alert thresholds.
//!
//! ## Condensation
//!
//! Water condenses on the enclosure when the air temperature drops to the dew
//! point. A reading raises [`Alert::CondensationRisk`] when
//!
//! ```text
//! temperature - dew_point ≤ condensation_margin
//! ```

use heapless::Vec;

use crate::{
    checks::{ascending, finite},
    errors::ConfigResult,
};

/// Largest number of alerts a single reading can raise
pub const MAX_ALERTS: usize = 7;

/// One set of converted sensor values
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Reading {
    /// Air temperature (°C)
    pub temperature_c: f32,
    /// Relative humidity (%)
    pub humidity_pct: f32,
    /// Station pressure (hPa)
    pub pressure_hpa: f32,
    /// Dew point (°C), when the caller computed one
    pub dew_point_c: Option<f32>,
}

/// Condition raised by a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Alert {
    /// Temperature below the low threshold
    TemperatureLow,
    /// Temperature above the high threshold
    TemperatureHigh,
    /// Humidity below the low threshold
    HumidityLow,
    /// Humidity above the high threshold
    HumidityHigh,
    /// Pressure below the low threshold
    PressureLow,
    /// Pressure above the high threshold
    PressureHigh,
    /// Air temperature close to the dew point
    CondensationRisk,
}

/// Alert limits of a site
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlertThresholds {
    /// Low temperature limit (°C)
    pub temperature_low_c: f32,
    /// High temperature limit (°C)
    pub temperature_high_c: f32,
    /// Low humidity limit (%)
    pub humidity_low_pct: f32,
    /// High humidity limit (%)
    pub humidity_high_pct: f32,
    /// Low pressure limit (hPa)
    pub pressure_low_hpa: f32,
    /// High pressure limit (hPa)
    pub pressure_high_hpa: f32,
    /// Dew point proximity that counts as condensation risk (°C)
    pub condensation_margin_c: f32,
}

impl AlertThresholds {
    /// Alerts raised by `reading`, in declaration order
    ///
    /// Limits are exclusive: a value equal to a limit raises nothing.
    pub fn evaluate(&self, reading: &Reading) -> Vec<Alert, MAX_ALERTS> {
        let checks = [
            (reading.temperature_c < self.temperature_low_c, Alert::TemperatureLow),
            (reading.temperature_c > self.temperature_high_c, Alert::TemperatureHigh),
            (reading.humidity_pct < self.humidity_low_pct, Alert::HumidityLow),
            (reading.humidity_pct > self.humidity_high_pct, Alert::HumidityHigh),
            (reading.pressure_hpa < self.pressure_low_hpa, Alert::PressureLow),
            (reading.pressure_hpa > self.pressure_high_hpa, Alert::PressureHigh),
            (self.condensation_risk(reading), Alert::CondensationRisk),
        ];

        let mut alerts = Vec::new();
        for (raised, alert) in checks {
            if raised {
                // At most one entry per variant, capacity matches
                let _ = alerts.push(alert);
            }
        }
        alerts
    }

    /// Check whether the reading sits within the condensation margin
    pub fn condensation_risk(&self, reading: &Reading) -> bool {
        match reading.dew_point_c {
            Some(dew_point) => reading.temperature_c - dew_point <= self.condensation_margin_c,
            None => false,
        }
    }

    /// Check low ≤ high for every quantity and a non-negative margin
    pub fn validate(&self) -> ConfigResult<()> {
        ascending("alerts.temperature", &[self.temperature_low_c, self.temperature_high_c])?;
        ascending("alerts.humidity", &[self.humidity_low_pct, self.humidity_high_pct])?;
        ascending("alerts.pressure", &[self.pressure_low_hpa, self.pressure_high_hpa])?;
        ascending("alerts.condensation_margin", &[0.0, self.condensation_margin_c])
    }
}

/// Per-sensor calibration offsets
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SensorOffsets {
    /// Added to temperature readings (°C)
    pub temperature_c: f32,
    /// Added to humidity readings (%)
    pub humidity_pct: f32,
    /// Added to pressure readings (hPa)
    pub pressure_hpa: f32,
}

impl SensorOffsets {
    /// No offset on any sensor
    pub const ZERO: Self = Self {
        temperature_c: 0.0,
        humidity_pct: 0.0,
        pressure_hpa: 0.0,
    };

    /// Apply the offsets; the dew point follows the temperature offset
    pub fn apply(&self, reading: Reading) -> Reading {
        Reading {
            temperature_c: reading.temperature_c + self.temperature_c,
            humidity_pct: reading.humidity_pct + self.humidity_pct,
            pressure_hpa: reading.pressure_hpa + self.pressure_hpa,
            dew_point_c: reading.dew_point_c.map(|dew| dew + self.temperature_c),
        }
    }

    /// Check that every offset is finite
    pub fn validate(&self) -> ConfigResult<()> {
        finite("offsets.temperature_c", self.temperature_c)?;
        finite("offsets.humidity_pct", self.humidity_pct)?;
        finite("offsets.pressure_hpa", self.pressure_hpa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;

    const LIMITS: AlertThresholds = AlertThresholds {
        temperature_low_c: 5.0,
        temperature_high_c: 30.0,
        humidity_low_pct: 60.0,
        humidity_high_pct: 95.0,
        pressure_low_hpa: 990.0,
        pressure_high_hpa: 1040.0,
        condensation_margin_c: 2.0,
    };

    const CALM: Reading = Reading {
        temperature_c: 18.0,
        humidity_pct: 80.0,
        pressure_hpa: 1005.0,
        dew_point_c: Some(14.5),
    };

    #[test]
    fn calm_reading_raises_nothing() {
        assert!(LIMITS.evaluate(&CALM).is_empty());
    }

    #[test]
    fn limits_are_exclusive() {
        let edge = Reading {
            temperature_c: 30.0,
            humidity_pct: 60.0,
            pressure_hpa: 1040.0,
            dew_point_c: None,
        };
        assert!(LIMITS.evaluate(&edge).is_empty());
    }

    #[test]
    fn cold_dry_storm() {
        let reading = Reading {
            temperature_c: 3.0,
            humidity_pct: 55.0,
            pressure_hpa: 985.0,
            dew_point_c: Some(-6.0),
        };
        assert_eq!(
            LIMITS.evaluate(&reading).as_slice(),
            &[Alert::TemperatureLow, Alert::HumidityLow, Alert::PressureLow]
        );
    }

    #[test]
    fn condensation_within_margin() {
        let foggy = Reading { temperature_c: 12.0, humidity_pct: 97.0, dew_point_c: Some(10.5), ..CALM };
        assert_eq!(
            LIMITS.evaluate(&foggy).as_slice(),
            &[Alert::HumidityHigh, Alert::CondensationRisk]
        );

        let no_dew_point = Reading { dew_point_c: None, ..foggy };
        assert!(!LIMITS.condensation_risk(&no_dew_point));
    }

    #[test]
    fn every_alert_at_once_fits() {
        let inverted = AlertThresholds {
            temperature_low_c: 50.0,
            temperature_high_c: -50.0,
            humidity_low_pct: 100.0,
            humidity_high_pct: 0.0,
            pressure_low_hpa: 2000.0,
            pressure_high_hpa: 0.0,
            condensation_margin_c: 100.0,
        };
        assert_eq!(inverted.evaluate(&CALM).len(), MAX_ALERTS);
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn thresholds_validate() {
        assert!(LIMITS.validate().is_ok());
        let bad = AlertThresholds { pressure_low_hpa: 1050.0, ..LIMITS };
        assert_eq!(
            bad.validate(),
            Err(ConfigError::InvertedRange { field: "alerts.pressure", min: 1050.0, max: 1040.0 })
        );
    }

    #[test]
    fn offsets_shift_reading() {
        let offsets = SensorOffsets { temperature_c: -0.5, humidity_pct: 2.0, pressure_hpa: 1.25 };
        let shifted = offsets.apply(CALM);
        assert_eq!(shifted.temperature_c, 17.5);
        assert_eq!(shifted.humidity_pct, 82.0);
        assert_eq!(shifted.pressure_hpa, 1006.25);
        assert_eq!(shifted.dew_point_c, Some(14.0));

        assert_eq!(SensorOffsets::ZERO.apply(CALM), CALM);
        assert!(SensorOffsets { humidity_pct: f32::NAN, ..offsets }.validate().is_err());
    }
}
