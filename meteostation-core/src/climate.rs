//! Regional climate baselines
//!
//! Fixed environmental parameters of one deployment site. Values are baked
//! into a preset at build time; moving the station means rebuilding with a
//! different preset.

use crate::{
    checks::{ascending, within},
    constants::physics::{ALTITUDE_MAX_M, ALTITUDE_MIN_M, HUMIDITY_MAX_PCT},
    errors::{ConfigError, ConfigResult},
};

/// Geographic position of the station
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Location {
    /// Human readable site name
    pub name: Option<&'static str>,
    /// Altitude above sea level (m)
    pub altitude_m: f32,
    /// Latitude (degrees, north positive)
    pub latitude: f32,
    /// Longitude (degrees, east positive)
    pub longitude: f32,
}

impl Location {
    /// Check altitude band and coordinate ranges
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.altitude_m.is_finite() {
            return Err(ConfigError::NotFinite { field: "location.altitude_m" });
        }
        if self.altitude_m < ALTITUDE_MIN_M || self.altitude_m > ALTITUDE_MAX_M {
            return Err(ConfigError::AltitudeOutOfRange {
                altitude_m: self.altitude_m,
                min: ALTITUDE_MIN_M,
                max: ALTITUDE_MAX_M,
            });
        }
        within("location.latitude", self.latitude, -90.0, 90.0)?;
        within("location.longitude", self.longitude, -180.0, 180.0)
    }
}

/// Annual temperature pattern (°C)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TemperatureProfile {
    /// Typical annual minimum
    pub min_annual: f32,
    /// Typical annual maximum
    pub max_annual: f32,
    /// Annual mean, if recorded
    pub mean_annual: Option<f32>,
    /// Average of the coldest month, if recorded
    pub cold_month_avg: Option<f32>,
    /// Average of the hottest month, if recorded
    pub hot_month_avg: Option<f32>,
}

impl TemperatureProfile {
    /// Check min ≤ max and that the averages fall inside
    pub fn validate(&self) -> ConfigResult<()> {
        ascending("temperature", &[self.min_annual, self.max_annual])?;
        for (field, value) in [
            ("temperature.mean_annual", self.mean_annual),
            ("temperature.cold_month_avg", self.cold_month_avg),
            ("temperature.hot_month_avg", self.hot_month_avg),
        ] {
            if let Some(value) = value {
                within(field, value, self.min_annual, self.max_annual)?;
            }
        }
        if let (Some(cold), Some(hot)) = (self.cold_month_avg, self.hot_month_avg) {
            ascending("temperature.month_avg", &[cold, hot])?;
        }
        Ok(())
    }
}

/// Relative humidity pattern (%)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HumidityProfile {
    /// Typical minimum
    pub min_typical: f32,
    /// Typical maximum
    pub max_typical: f32,
    /// Annual mean, if recorded
    pub mean: Option<f32>,
    /// Average during the dry season, if recorded
    pub dry_season_avg: Option<f32>,
    /// Average during the rainy season, if recorded
    pub wet_season_avg: Option<f32>,
}

impl HumidityProfile {
    /// Typical humidity for the season
    ///
    /// Seasonal average first, then the annual mean, then the midpoint of the
    /// typical range.
    pub fn typical(&self, rainy: bool) -> f32 {
        let seasonal = if rainy { self.wet_season_avg } else { self.dry_season_avg };
        seasonal
            .or(self.mean)
            .unwrap_or((self.min_typical + self.max_typical) / 2.0)
    }

    /// Check min ≤ max, all values within 0-100 %
    pub fn validate(&self) -> ConfigResult<()> {
        ascending("humidity", &[0.0, self.min_typical, self.max_typical, HUMIDITY_MAX_PCT])?;
        for (field, value) in [
            ("humidity.mean", self.mean),
            ("humidity.dry_season_avg", self.dry_season_avg),
            ("humidity.wet_season_avg", self.wet_season_avg),
        ] {
            if let Some(value) = value {
                within(field, value, 0.0, HUMIDITY_MAX_PCT)?;
            }
        }
        Ok(())
    }
}

/// Atmospheric pressure baseline (hPa)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PressureProfile {
    /// Sea-level reference for the barometric formula
    pub sea_level_hpa: f32,
    /// Typical minimum, during storms
    pub typical_min: Option<f32>,
    /// Typical maximum, during anticyclones
    pub typical_max: Option<f32>,
    /// Typical mean
    pub typical_mean: Option<f32>,
}

impl PressureProfile {
    /// Check the reference and the typical range
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.sea_level_hpa.is_finite() || self.sea_level_hpa <= 0.0 {
            return Err(ConfigError::NotFinite { field: "pressure.sea_level_hpa" });
        }
        if let (Some(min), Some(max)) = (self.typical_min, self.typical_max) {
            ascending("pressure.typical", &[min, max])?;
            if let Some(mean) = self.typical_mean {
                within("pressure.typical_mean", mean, min, max)?;
            }
        }
        Ok(())
    }
}

/// Typical wind speeds (km/h)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WindProfile {
    /// Typical minimum
    pub min_kmh: f32,
    /// Typical average
    pub avg_kmh: f32,
    /// Typical maximum
    pub max_kmh: f32,
}

impl WindProfile {
    /// Check 0 ≤ min ≤ avg ≤ max
    pub fn validate(&self) -> ConfigResult<()> {
        ascending("wind", &[0.0, self.min_kmh, self.avg_kmh, self.max_kmh])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: Location = Location {
        name: Some("Highland"),
        altitude_m: 2219.0,
        latitude: 19.0,
        longitude: -99.0,
    };

    const HUMIDITY: HumidityProfile = HumidityProfile {
        min_typical: 75.0,
        max_typical: 91.0,
        mean: None,
        dry_season_avg: Some(75.0),
        wet_season_avg: Some(85.0),
    };

    #[test]
    fn altitude_band() {
        assert!(SITE.validate().is_ok());
        assert!(Location { altitude_m: 0.0, ..SITE }.validate().is_ok());
        assert!(Location { altitude_m: 10_000.0, ..SITE }.validate().is_ok());
        assert_eq!(
            Location { altitude_m: -5.0, ..SITE }.validate(),
            Err(ConfigError::AltitudeOutOfRange { altitude_m: -5.0, min: 0.0, max: 10_000.0 })
        );
        assert!(Location { altitude_m: 10_001.0, ..SITE }.validate().is_err());
        assert!(Location { altitude_m: f32::NAN, ..SITE }.validate().is_err());
    }

    #[test]
    fn coordinates_in_range() {
        assert!(Location { latitude: 91.0, ..SITE }.validate().is_err());
        assert!(Location { longitude: -181.0, ..SITE }.validate().is_err());
    }

    #[test]
    fn temperature_ordering() {
        let temps = TemperatureProfile {
            min_annual: 6.0,
            max_annual: 27.0,
            mean_annual: None,
            cold_month_avg: Some(12.0),
            hot_month_avg: Some(23.5),
        };
        assert!(temps.validate().is_ok());

        let inverted = TemperatureProfile { min_annual: 30.0, ..temps };
        assert_eq!(
            inverted.validate(),
            Err(ConfigError::InvertedRange { field: "temperature", min: 30.0, max: 27.0 })
        );
    }

    #[test]
    fn seasonal_humidity() {
        assert_eq!(HUMIDITY.typical(true), 85.0);
        assert_eq!(HUMIDITY.typical(false), 75.0);
        assert!(HUMIDITY.validate().is_ok());
    }

    #[test]
    fn humidity_falls_back_to_mean_then_midpoint() {
        let mean_only = HumidityProfile {
            mean: Some(83.0),
            dry_season_avg: None,
            wet_season_avg: None,
            ..HUMIDITY
        };
        assert_eq!(mean_only.typical(true), 83.0);
        assert_eq!(mean_only.typical(false), 83.0);

        let bare = HumidityProfile { mean: None, ..mean_only };
        assert_eq!(bare.typical(true), 83.0);
    }

    #[test]
    fn humidity_bounds() {
        assert!(HumidityProfile { max_typical: 101.0, ..HUMIDITY }.validate().is_err());
        assert!(HumidityProfile { min_typical: 95.0, ..HUMIDITY }.validate().is_err());
    }

    #[test]
    fn pressure_range() {
        let pressure = PressureProfile {
            sea_level_hpa: 1013.25,
            typical_min: Some(980.0),
            typical_max: Some(1030.0),
            typical_mean: Some(1005.0),
        };
        assert!(pressure.validate().is_ok());
        assert!(PressureProfile { typical_mean: Some(1040.0), ..pressure }.validate().is_err());
    }

    #[test]
    fn wind_ordering() {
        assert!(WindProfile { min_kmh: 5.0, avg_kmh: 15.0, max_kmh: 35.0 }.validate().is_ok());
        assert!(WindProfile { min_kmh: 5.0, avg_kmh: 40.0, max_kmh: 35.0 }.validate().is_err());
    }
}
