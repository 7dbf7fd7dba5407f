//! Validated station configuration
//!
//! [`StationConfig`] is the one record handed to the drivers, the display and
//! the prediction layer. It is built once at startup, fails fast on a bad
//! profile, and is read-only afterwards.
//!
//! ```rust
//! use meteostation_core::{FixedMonth, Month, Season, StationConfig};
//!
//! let config = StationConfig::regional().unwrap();
//!
//! assert!(config.is_rainy_season(Month::JULY));
//! assert_eq!(config.current_season(&FixedMonth(Month::DECEMBER)), Season::Cold);
//! assert!((config.base_pressure_hpa() - 773.6).abs() < 0.5);
//! ```

use heapless::Vec;

use crate::{
    alerts::{Alert, Reading, MAX_ALERTS},
    calendar::MonthSource,
    errors::ConfigResult,
    month::Month,
    presets::{CALIBRATION, REGIONAL},
    profile::StationProfile,
    seasons::Season,
};

/// Immutable, validated station configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationConfig {
    profile: StationProfile,
    base_pressure_hpa: f32,
}

impl StationConfig {
    /// Validate `profile` and derive the base pressure
    pub fn new(profile: StationProfile) -> ConfigResult<Self> {
        profile.validate()?;
        let base_pressure_hpa = profile.base_pressure_hpa();
        log_debug!(
            "station {} v{}: altitude {} m, base pressure {} hPa",
            profile.id,
            profile.version,
            profile.location.altitude_m,
            base_pressure_hpa
        );
        Ok(Self {
            profile,
            base_pressure_hpa,
        })
    }

    /// Sensor calibration build
    pub fn calibration() -> ConfigResult<Self> {
        Self::new(CALIBRATION)
    }

    /// Master/slave regional build
    pub fn regional() -> ConfigResult<Self> {
        Self::new(REGIONAL)
    }

    /// Underlying profile
    pub fn profile(&self) -> &StationProfile {
        &self.profile
    }

    /// Base pressure at the site altitude (hPa), computed once
    pub fn base_pressure_hpa(&self) -> f32 {
        self.base_pressure_hpa
    }

    /// Site altitude (m)
    pub fn altitude_m(&self) -> f32 {
        self.profile.location.altitude_m
    }

    // Season lookups

    /// Check if `month` is in the rainy season
    pub fn is_rainy_season(&self, month: Month) -> bool {
        self.profile.seasons.is_rainy(month)
    }

    /// Rainy-season check for a raw month number (1-12)
    pub fn is_rainy_season_number(&self, month: u8) -> ConfigResult<bool> {
        Ok(self.is_rainy_season(Month::new(month)?))
    }

    /// Check if `month` is in the hot season
    pub fn is_hot_season(&self, month: Month) -> bool {
        self.profile.seasons.is_hot(month)
    }

    /// Check if `month` is in the cold season
    pub fn is_cold_season(&self, month: Month) -> bool {
        self.profile.seasons.is_cold(month)
    }

    /// Season label of `month`
    pub fn season(&self, month: Month) -> Season {
        self.profile.seasons.classify(month)
    }

    /// Typical relative humidity in `month` (%)
    pub fn typical_humidity(&self, month: Month) -> f32 {
        self.profile.humidity.typical(self.is_rainy_season(month))
    }

    /// Rain probability bonus in `month` (percentage points)
    pub fn seasonal_rain_bonus(&self, month: Month) -> f32 {
        self.profile.seasons.rain_bonus(month)
    }

    // Same lookups against an injected clock

    /// Season label of the current month
    pub fn current_season(&self, clock: &impl MonthSource) -> Season {
        self.season(clock.current_month())
    }

    /// Check if the current month is in the rainy season
    pub fn is_rainy_season_now(&self, clock: &impl MonthSource) -> bool {
        self.is_rainy_season(clock.current_month())
    }

    /// Check if the current month is in the hot season
    pub fn is_hot_season_now(&self, clock: &impl MonthSource) -> bool {
        self.is_hot_season(clock.current_month())
    }

    /// Check if the current month is in the cold season
    pub fn is_cold_season_now(&self, clock: &impl MonthSource) -> bool {
        self.is_cold_season(clock.current_month())
    }

    /// Rain probability bonus for the current month
    pub fn seasonal_rain_bonus_now(&self, clock: &impl MonthSource) -> f32 {
        self.seasonal_rain_bonus(clock.current_month())
    }

    /// Typical humidity for the current month
    pub fn typical_humidity_now(&self, clock: &impl MonthSource) -> f32 {
        self.typical_humidity(clock.current_month())
    }

    // Sensor post-processing

    /// Altitude-corrected temperature (°C)
    pub fn correct_temperature(&self, raw_c: f32) -> f32 {
        self.profile.corrections.temperature(raw_c, self.altitude_m())
    }

    /// Altitude-corrected pressure (hPa)
    pub fn correct_pressure(&self, raw_hpa: f32) -> f32 {
        self.profile.corrections.pressure(raw_hpa, self.altitude_m())
    }

    /// Altitude-corrected dew point (°C)
    pub fn correct_dew_point(&self, raw_c: f32) -> f32 {
        self.profile.corrections.dew_point(raw_c, self.altitude_m())
    }

    /// Raw LDR reading mapped onto the UV scale
    pub fn calibrate_ldr(&self, raw: i32) -> ConfigResult<i32> {
        self.profile.uv.calibrate(raw)
    }

    /// Reading with the calibration offsets applied
    pub fn apply_offsets(&self, reading: Reading) -> Reading {
        self.profile.offsets.apply(reading)
    }

    /// Alerts raised by an offset-corrected reading
    ///
    /// Profiles without alert thresholds never raise anything.
    pub fn alerts(&self, reading: &Reading) -> Vec<Alert, MAX_ALERTS> {
        match &self.profile.alerts {
            Some(thresholds) => thresholds.evaluate(reading),
            None => Vec::new(),
        }
    }
}
