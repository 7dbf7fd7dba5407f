//! Timing, display and diagnostics settings
//!
//! Intervals are in milliseconds of device uptime. Optional intervals belong
//! to tasks a given firmware build may not run.

use crate::errors::{ConfigError, ConfigResult};

/// Periodic task intervals (ms)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Timing {
    /// Sensor polling
    pub sensor_update_ms: u32,
    /// Time each screen stays visible
    pub screen_rotation_ms: u32,
    /// Prediction refresh, if run
    pub prediction_update_ms: Option<u32>,
    /// History sample, if kept
    pub history_update_ms: Option<u32>,
    /// Serial report, if enabled
    pub serial_output_ms: Option<u32>,
}

impl Timing {
    /// Reject zero intervals
    pub fn validate(&self) -> ConfigResult<()> {
        let intervals = [
            ("timing.sensor_update_ms", Some(self.sensor_update_ms)),
            ("timing.screen_rotation_ms", Some(self.screen_rotation_ms)),
            ("timing.prediction_update_ms", self.prediction_update_ms),
            ("timing.history_update_ms", self.history_update_ms),
            ("timing.serial_output_ms", self.serial_output_ms),
        ];
        for (field, interval) in intervals {
            if interval == Some(0) {
                return Err(ConfigError::ZeroInterval { field });
            }
        }
        Ok(())
    }
}

/// Decimal places shown per quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Precision {
    /// Temperature decimals
    pub temperature: u8,
    /// Humidity decimals
    pub humidity: u8,
    /// Pressure decimals
    pub pressure: u8,
    /// Altitude decimals
    pub altitude: u8,
}

impl Precision {
    /// One decimal everywhere except altitude
    pub const DEFAULT: Self = Self {
        temperature: 1,
        humidity: 1,
        pressure: 1,
        altitude: 0,
    };
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// LCD presentation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DisplaySettings {
    /// Contrast (0-255)
    pub contrast: u8,
    /// Screens in the rotation
    pub screen_count: u8,
    /// Draw custom glyphs
    pub show_icons: bool,
    /// Prefer abbreviations over full captions
    pub use_abbreviations: bool,
    /// Decimal places
    pub precision: Precision,
}

impl DisplaySettings {
    /// Reject an empty rotation
    pub fn validate(&self) -> ConfigResult<()> {
        if self.screen_count == 0 {
            return Err(ConfigError::ZeroValue { field: "display.screen_count" });
        }
        Ok(())
    }
}

/// Debug output and power flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostics {
    /// Master debug switch
    pub debug: bool,
    /// Trace sensor readings
    pub debug_sensors: bool,
    /// Trace the learning layer
    pub debug_learning: bool,
    /// Trace predictions
    pub debug_predictions: bool,
    /// Serial port speed
    pub serial_baud: u32,
    /// Periodic serial report
    pub serial_output: bool,
    /// Reduce power draw
    pub power_save: bool,
    /// Sleep between sensor reads
    pub sleep_between_readings: bool,
}

impl Diagnostics {
    /// Whether sensor tracing is active
    pub const fn traces_sensors(&self) -> bool {
        self.debug && self.debug_sensors
    }

    /// Whether prediction tracing is active
    pub const fn traces_predictions(&self) -> bool {
        self.debug && self.debug_predictions
    }

    /// Reject a zero baud rate
    pub fn validate(&self) -> ConfigResult<()> {
        if self.serial_baud == 0 {
            return Err(ConfigError::ZeroValue { field: "diagnostics.serial_baud" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMING: Timing = Timing {
        sensor_update_ms: 1000,
        screen_rotation_ms: 3000,
        prediction_update_ms: Some(5000),
        history_update_ms: Some(300_000),
        serial_output_ms: Some(10_000),
    };

    #[test]
    fn zero_intervals_rejected() {
        assert!(TIMING.validate().is_ok());
        assert_eq!(
            Timing { history_update_ms: Some(0), ..TIMING }.validate(),
            Err(ConfigError::ZeroInterval { field: "timing.history_update_ms" })
        );
        assert!(Timing { prediction_update_ms: None, ..TIMING }.validate().is_ok());
    }

    #[test]
    fn empty_rotation_rejected() {
        let display = DisplaySettings {
            contrast: 128,
            screen_count: 0,
            show_icons: true,
            use_abbreviations: true,
            precision: Precision::default(),
        };
        assert_eq!(
            display.validate(),
            Err(ConfigError::ZeroValue { field: "display.screen_count" })
        );
        assert!(DisplaySettings { screen_count: 8, ..display }.validate().is_ok());
    }

    #[test]
    fn tracing_needs_master_switch() {
        let diagnostics = Diagnostics {
            debug: false,
            debug_sensors: true,
            debug_learning: true,
            debug_predictions: true,
            serial_baud: 9600,
            serial_output: true,
            power_save: false,
            sleep_between_readings: false,
        };
        assert!(!diagnostics.traces_sensors());
        assert!(Diagnostics { debug: true, ..diagnostics }.traces_predictions());
        assert_eq!(
            Diagnostics { serial_baud: 0, ..diagnostics }.validate(),
            Err(ConfigError::ZeroValue { field: "diagnostics.serial_baud" })
        );
    }
}
