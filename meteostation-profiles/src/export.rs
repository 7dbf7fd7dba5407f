//! JSON export of station profiles
//!
//! A document carries the profile as configured plus the values the firmware
//! derives from it at startup, so consumers never re-implement the formulas.
//!
//! ```json
//! {
//!   "profile": { "id": "regional", "version": 1, ... },
//!   "derived": {
//!     "base_pressure_hpa": 773.6,
//!     "weight_sum": 1.0,
//!     "weights_normalized": true,
//!     "rainy_months": [6, 7, 8, 9]
//!   }
//! }
//! ```

use serde::Serialize;

use meteostation_core::{prediction::WEIGHT_SUM_TOLERANCE, Month, StationProfile};

use crate::{ProfileError, ProfileResult};

/// Values derived from a profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedValues {
    /// Base pressure at the site altitude (hPa)
    pub base_pressure_hpa: f32,
    /// Sum of the four prediction weights
    pub weight_sum: f32,
    /// Whether the weights sum to 1.0
    pub weights_normalized: bool,
    /// Months of the rainy season
    pub rainy_months: Vec<Month>,
}

impl DerivedValues {
    /// Derive from `profile`
    pub fn from_profile(profile: &StationProfile) -> Self {
        let weights = &profile.prediction.weights;
        Self {
            base_pressure_hpa: profile.base_pressure_hpa(),
            weight_sum: weights.sum(),
            weights_normalized: weights.is_normalized(WEIGHT_SUM_TOLERANCE),
            rainy_months: profile.seasons.rainy.iter().collect(),
        }
    }
}

/// Exported profile document
#[derive(Debug, Clone, Serialize)]
pub struct ProfileDocument<'a> {
    /// Profile as configured
    pub profile: &'a StationProfile,
    /// Derived values
    pub derived: DerivedValues,
}

impl<'a> ProfileDocument<'a> {
    /// Document for `profile`
    pub fn new(profile: &'a StationProfile) -> Self {
        Self {
            profile,
            derived: DerivedValues::from_profile(profile),
        }
    }
}

/// Compact JSON document for `profile`
pub fn to_json(profile: &StationProfile) -> ProfileResult<String> {
    serde_json::to_string(&ProfileDocument::new(profile))
        .map_err(|e| ProfileError::Serialization(e.to_string()))
}

/// Indented JSON document for `profile`
pub fn to_json_pretty(profile: &StationProfile) -> ProfileResult<String> {
    serde_json::to_string_pretty(&ProfileDocument::new(profile))
        .map_err(|e| ProfileError::Serialization(e.to_string()))
}
