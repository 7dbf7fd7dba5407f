//! Unified station profile
//!
//! One schema covers every deployment. Groups only some sites record are
//! `Option`; a preset fills in what it knows and leaves the rest empty.
//! Profiles are plain `const` data and never change at runtime.

use crate::{
    alerts::{AlertThresholds, SensorOffsets},
    barometric::pressure_at_altitude,
    climate::{HumidityProfile, Location, PressureProfile, TemperatureProfile, WindProfile},
    corrections::AltitudeCorrections,
    errors::{ConfigError, ConfigResult},
    prediction::{PredictionInputs, WEIGHT_SUM_TOLERANCE},
    seasons::SeasonCalendar,
    settings::{Diagnostics, DisplaySettings, Timing},
    text::LabelSet,
    wiring::{LdrThresholds, SensorWiring, UvCalibration},
};

/// Complete configuration of one station
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StationProfile {
    /// Stable identifier, e.g. `"regional"`
    pub id: &'static str,
    /// Schema revision of this profile
    pub version: u32,
    /// Site position
    pub location: Location,
    /// Annual temperature pattern
    pub temperature: TemperatureProfile,
    /// Relative humidity pattern
    pub humidity: HumidityProfile,
    /// Pressure baseline
    pub pressure: PressureProfile,
    /// Typical wind speeds
    pub wind: Option<WindProfile>,
    /// Seasonal month ranges
    pub seasons: SeasonCalendar,
    /// Task intervals
    pub timing: Timing,
    /// Bus addresses and pins
    pub wiring: SensorWiring,
    /// Light sensor thresholds
    pub ldr: LdrThresholds,
    /// UV estimate from the light sensor
    pub uv: UvCalibration,
    /// Prediction layer inputs
    pub prediction: PredictionInputs,
    /// Alert limits
    pub alerts: Option<AlertThresholds>,
    /// Per-sensor calibration offsets
    pub offsets: SensorOffsets,
    /// Altitude correction factors
    pub corrections: AltitudeCorrections,
    /// LCD presentation
    pub display: DisplaySettings,
    /// Debug and power flags
    pub diagnostics: Diagnostics,
    /// Display strings
    pub labels: LabelSet,
}

impl StationProfile {
    /// Base pressure at the site altitude (hPa)
    pub fn base_pressure_hpa(&self) -> f32 {
        pressure_at_altitude(self.location.altitude_m, self.pressure.sea_level_hpa)
    }

    /// Validate every group
    ///
    /// Stops at the first violation. Weights that do not sum to 1.0 are
    /// logged, not rejected.
    pub fn validate(&self) -> ConfigResult<()> {
        self.location.validate()?;
        self.temperature.validate()?;
        self.humidity.validate()?;
        self.pressure.validate()?;
        if let Some(wind) = &self.wind {
            wind.validate()?;
        }
        self.timing.validate()?;
        self.wiring.validate()?;
        self.ldr.validate()?;
        self.uv.validate()?;
        self.prediction.validate()?;
        if let Some(alerts) = &self.alerts {
            alerts.validate()?;
        }
        self.offsets.validate()?;
        if !self.corrections.all_finite() {
            return Err(ConfigError::NotFinite { field: "corrections" });
        }
        self.display.validate()?;
        self.diagnostics.validate()?;
        self.labels.validate()?;

        let weights = &self.prediction.weights;
        if !weights.is_normalized(WEIGHT_SUM_TOLERANCE) {
            log_warn!(
                "profile {} v{}: prediction weights sum to {}, expected 1.0",
                self.id,
                self.version,
                weights.sum()
            );
        }
        Ok(())
    }
}
