//! Error Types for Configuration Validation
//!
//! ## Design Philosophy
//!
//! Configuration errors are raised once, at startup, when a profile is turned
//! into a [`StationConfig`](crate::StationConfig). The error type still follows
//! the embedded rules used everywhere else in the crate:
//!
//! 1. **No Heap Allocation**: payloads are numbers and `&'static str` field
//!    names, never `String`.
//! 2. **Copy Semantics**: errors are `Copy` so they can be logged and returned
//!    without cloning.
//! 3. **Actionable Information**: every variant names the offending field and
//!    the bound it broke, so a bad preset can be fixed without a debugger.
//!
//! ## Error Categories
//!
//! ### Profile violations
//! - `AltitudeOutOfRange`: site altitude outside [0, 10000] m
//! - `InvertedRange`: a minimum is larger than its maximum
//! - `NotFinite`: NaN or infinity in a numeric field
//! - `ThresholdOutOfRange`: raw ADC threshold outside the converter range
//! - `InvalidI2cAddress`: address does not fit in 7 bits
//! - `DuplicateLabel`: the same display label defined twice
//! - `ZeroInterval`: a periodic task configured with a 0 ms interval
//! - `ZeroValue`: a count or rate (screens, baud, history hours) set to 0
//!
//! ### Input violations
//! - `MonthOutOfRange`: month number outside the calendar domain
//! - `EmptyInputRange`: linear map with identical input bounds
//! - `LabelTooLong`: folded display text does not fit the target buffer
//!
//! ## Handling Strategy
//!
//! ```rust
//! use meteostation_core::{ConfigError, StationConfig, presets};
//!
//! match StationConfig::new(presets::REGIONAL) {
//!     Ok(config) => {
//!         let _ = config.base_pressure_hpa();
//!     }
//!     Err(ConfigError::AltitudeOutOfRange { .. }) => {
//!         // Wrong site data - refuse to start
//!     }
//!     Err(_) => {
//!         // Any other profile defect
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Site altitude outside the supported band
    #[error("Altitude {altitude_m} m outside [{min}, {max}]")]
    AltitudeOutOfRange {
        /// Configured altitude in meters
        altitude_m: f32,
        /// Lowest supported altitude
        min: f32,
        /// Highest supported altitude
        max: f32,
    },

    /// A lower bound is larger than its upper bound
    #[error("{field}: minimum {min} exceeds maximum {max}")]
    InvertedRange {
        /// Name of the range that is inverted
        field: &'static str,
        /// Configured lower bound
        min: f32,
        /// Configured upper bound
        max: f32,
    },

    /// Month number outside the calendar domain
    #[error("Month {value} outside [{min}, {max}]")]
    MonthOutOfRange {
        /// The rejected month number
        value: u8,
        /// First valid month number
        min: u8,
        /// Last valid month number
        max: u8,
    },

    /// Numeric field is NaN or infinite
    #[error("{field} is not a finite number")]
    NotFinite {
        /// Name of the offending field
        field: &'static str,
    },

    /// Linear map input bounds are identical
    #[error("Input range [{min}, {max}] is empty")]
    EmptyInputRange {
        /// Lower input bound
        min: i32,
        /// Upper input bound
        max: i32,
    },

    /// I2C address does not fit in 7 bits
    #[error("{device}: I2C address {address:#04x} is not a 7-bit address")]
    InvalidI2cAddress {
        /// Device the address belongs to
        device: &'static str,
        /// The rejected address
        address: u8,
    },

    /// Raw ADC threshold outside the converter range
    #[error("{field}: threshold {value} exceeds converter maximum {max}")]
    ThresholdOutOfRange {
        /// Name of the threshold
        field: &'static str,
        /// Configured threshold
        value: u16,
        /// Largest raw value the converter produces
        max: u16,
    },

    /// A display label is defined more than once
    #[error("Display label {label} defined more than once")]
    DuplicateLabel {
        /// Label defined twice
        label: &'static str,
    },

    /// Folded display text does not fit the target buffer
    #[error("Display text needs more than {capacity} characters")]
    LabelTooLong {
        /// Capacity of the target buffer
        capacity: usize,
    },

    /// Periodic task configured with a zero interval
    #[error("{field}: interval must be greater than zero")]
    ZeroInterval {
        /// Name of the interval
        field: &'static str,
    },

    /// Count or rate configured as zero
    #[error("{field} must be greater than zero")]
    ZeroValue {
        /// Name of the offending field
        field: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::AltitudeOutOfRange { altitude_m, min, max } =>
                defmt::write!(fmt, "Altitude {} outside [{}, {}]", altitude_m, min, max),
            Self::InvertedRange { field, min, max } =>
                defmt::write!(fmt, "{}: min {} > max {}", field, min, max),
            Self::MonthOutOfRange { value, min, max } =>
                defmt::write!(fmt, "Month {} outside [{}, {}]", value, min, max),
            Self::NotFinite { field } =>
                defmt::write!(fmt, "{} not finite", field),
            Self::EmptyInputRange { min, max } =>
                defmt::write!(fmt, "Empty input range [{}, {}]", min, max),
            Self::InvalidI2cAddress { device, address } =>
                defmt::write!(fmt, "{}: bad I2C address {=u8:#x}", device, address),
            Self::ThresholdOutOfRange { field, value, max } =>
                defmt::write!(fmt, "{}: {} > {}", field, value, max),
            Self::DuplicateLabel { label } =>
                defmt::write!(fmt, "Duplicate label {}", label),
            Self::LabelTooLong { capacity } =>
                defmt::write!(fmt, "Text exceeds {} chars", capacity),
            Self::ZeroInterval { field } =>
                defmt::write!(fmt, "{}: zero interval", field),
            Self::ZeroValue { field } =>
                defmt::write!(fmt, "{} is zero", field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_stay_small() {
        // Largest payload is three f32s plus a pointer-sized field name
        assert!(core::mem::size_of::<ConfigError>() <= 32);
    }

    #[cfg(feature = "std")]
    #[test]
    fn messages_name_the_field() {
        let err = ConfigError::InvertedRange { field: "temperature", min: 30.0, max: 6.0 };
        assert_eq!(err.to_string(), "temperature: minimum 30 exceeds maximum 6");

        let err = ConfigError::InvalidI2cAddress { device: "bmp280", address: 0x90 };
        assert_eq!(err.to_string(), "bmp280: I2C address 0x90 is not a 7-bit address");

        let err = ConfigError::ZeroValue { field: "diagnostics.serial_baud" };
        assert_eq!(err.to_string(), "diagnostics.serial_baud must be greater than zero");

        let err = ConfigError::ZeroInterval { field: "timing.sensor_update_ms" };
        assert_eq!(err.to_string(), "timing.sensor_update_ms: interval must be greater than zero");
    }
}
