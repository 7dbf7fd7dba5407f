//! Constants for Meteostation Core
//!
//! Site-independent numbers live here: physical constants of the standard
//! atmosphere, converter and bus limits of the sensor hardware, and time
//! conversions. Site-specific values belong in a [`StationProfile`] preset
//! instead.
//!
//! [`StationProfile`]: crate::profile::StationProfile
//!
//! ## Organization
//!
//! - **Physics**: standard atmosphere and supported altitude band
//! - **Sensors**: ADC range, default I2C addresses
//! - **Time**: unit conversions and calendar sizes
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units

/// Standard atmosphere constants and altitude limits.
pub mod physics;

/// Converter ranges and bus addresses of the supported sensors.
pub mod sensors;

/// Time unit conversions and calendar sizes.
pub mod time;

pub use physics::{
    SEA_LEVEL_PRESSURE_HPA, STANDARD_TEMPERATURE_K, TEMPERATURE_LAPSE_K_PER_M,
    BAROMETRIC_EXPONENT, ALTITUDE_MIN_M, ALTITUDE_MAX_M,
};

pub use sensors::{ADC_RAW_MIN, ADC_RAW_MAX, I2C_ADDRESS_MAX};

pub use time::{MS_PER_SECOND, MS_PER_DAY, MONTHS_PER_YEAR};
