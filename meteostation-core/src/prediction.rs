//! Inputs of the rain-prediction layer
//!
//! The prediction model itself lives outside this crate. It consumes four
//! weighting factors and a set of pressure and humidity thresholds and
//! combines them into a bounded probability.
//!
//! ## Weight normalisation
//!
//! The four weights are meant to sum to 1.0, but nothing in the firmware ever
//! enforced it. [`PredictionWeights::sum`] and
//! [`PredictionWeights::is_normalized`] report the state; profile validation
//! logs a warning when the sum drifts and leaves the weights untouched.

use crate::{
    checks::ascending,
    errors::{ConfigError, ConfigResult},
};

/// Tolerance used when checking that the weights sum to 1.0
pub const WEIGHT_SUM_TOLERANCE: f32 = 1e-3;

/// Meaning of the fourth weighting factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ContextFactor {
    /// Weight of the site altitude
    Altitude,
    /// Weight of the seasonal rain bonus
    Seasonal,
}

/// Weights combined into the rain probability
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PredictionWeights {
    /// Weight of absolute pressure
    pub pressure: f32,
    /// Weight of relative humidity
    pub humidity: f32,
    /// Weight of the pressure trend
    pub trend: f32,
    /// Weight of the context factor
    pub context: f32,
    /// What the context weight applies to
    pub context_factor: ContextFactor,
}

impl PredictionWeights {
    /// Sum of the four weights
    pub fn sum(&self) -> f32 {
        self.pressure + self.humidity + self.trend + self.context
    }

    /// Check whether the weights sum to 1.0 within `tolerance`
    pub fn is_normalized(&self, tolerance: f32) -> bool {
        (self.sum() - 1.0).abs() <= tolerance
    }

    /// Check that every weight is a finite, non-negative number
    pub fn validate(&self) -> ConfigResult<()> {
        let weights = [
            ("weights.pressure", self.pressure),
            ("weights.humidity", self.humidity),
            ("weights.trend", self.trend),
            ("weights.context", self.context),
        ];
        for (field, weight) in weights {
            if !weight.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
            if weight < 0.0 {
                return Err(ConfigError::InvertedRange { field, min: 0.0, max: weight });
            }
        }
        Ok(())
    }
}

/// Ascending pressure classification thresholds (hPa)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PressureThresholds {
    /// Below this: storm (or "low")
    pub low: f32,
    /// Below this: rain likely (or "medium")
    pub medium: f32,
    /// Above this: clear skies (or "high")
    pub high: f32,
}

impl PressureThresholds {
    /// Check that the thresholds ascend
    pub fn validate(&self) -> ConfigResult<()> {
        ascending("pressure_thresholds", &[self.low, self.medium, self.high])
    }
}

/// Relative humidity classification thresholds (%)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HumidityThresholds {
    /// Below this: dry air
    pub low: f32,
    /// Above this: moist air
    pub medium: f32,
    /// Above this: saturated, rain likely
    pub high: f32,
}

impl HumidityThresholds {
    /// Check that the thresholds ascend
    pub fn validate(&self) -> ConfigResult<()> {
        ascending("humidity_thresholds", &[self.low, self.medium, self.high])
    }
}

/// Accuracy-learning parameters of the prediction layer
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LearningParams {
    /// Accuracy assumed before any feedback (%)
    pub initial_accuracy_pct: f32,
    /// Lowest accuracy reported (%)
    pub min_accuracy_pct: f32,
    /// Highest accuracy reported (%)
    pub max_accuracy_pct: f32,
    /// Step size of accuracy updates
    pub learning_rate: f32,
}

impl LearningParams {
    /// Bound an accuracy estimate to the configured range
    pub fn clamp_accuracy(&self, accuracy_pct: f32) -> f32 {
        accuracy_pct.clamp(self.min_accuracy_pct, self.max_accuracy_pct)
    }

    /// Check min ≤ initial ≤ max ≤ 100 and a usable learning rate
    pub fn validate(&self) -> ConfigResult<()> {
        ascending(
            "learning.accuracy",
            &[self.min_accuracy_pct, self.initial_accuracy_pct, self.max_accuracy_pct, 100.0],
        )?;
        if !self.learning_rate.is_finite() {
            return Err(ConfigError::NotFinite { field: "learning.learning_rate" });
        }
        if self.learning_rate <= 0.0 || self.learning_rate > 1.0 {
            return Err(ConfigError::InvertedRange {
                field: "learning.learning_rate",
                min: self.learning_rate,
                max: 1.0,
            });
        }
        Ok(())
    }
}

/// Everything the prediction layer reads from the profile
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PredictionInputs {
    /// Weighting factors
    pub weights: PredictionWeights,
    /// Pressure classification
    pub pressure: PressureThresholds,
    /// Humidity classification, if used
    pub humidity: Option<HumidityThresholds>,
    /// Accuracy learning, if used
    pub learning: Option<LearningParams>,
    /// Hours of history kept for trend detection
    pub history_hours: u16,
}

impl PredictionInputs {
    /// Validate every part
    pub fn validate(&self) -> ConfigResult<()> {
        self.weights.validate()?;
        self.pressure.validate()?;
        if let Some(humidity) = &self.humidity {
            humidity.validate()?;
        }
        if let Some(learning) = &self.learning {
            learning.validate()?;
        }
        if self.history_hours == 0 {
            return Err(ConfigError::ZeroValue { field: "prediction.history_hours" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEIGHTS: PredictionWeights = PredictionWeights {
        pressure: 0.4,
        humidity: 0.3,
        trend: 0.2,
        context: 0.1,
        context_factor: ContextFactor::Seasonal,
    };

    const LEARNING: LearningParams = LearningParams {
        initial_accuracy_pct: 50.0,
        min_accuracy_pct: 30.0,
        max_accuracy_pct: 95.0,
        learning_rate: 0.1,
    };

    #[test]
    fn weights_sum_to_one() {
        assert!((WEIGHTS.sum() - 1.0).abs() < 1e-6);
        assert!(WEIGHTS.is_normalized(WEIGHT_SUM_TOLERANCE));
        assert!(WEIGHTS.validate().is_ok());
    }

    #[test]
    fn unnormalized_weights_are_reported_not_rejected() {
        let heavy = PredictionWeights { pressure: 0.6, ..WEIGHTS };
        assert!(!heavy.is_normalized(WEIGHT_SUM_TOLERANCE));
        assert!(heavy.validate().is_ok());
    }

    #[test]
    fn negative_weight_rejected() {
        let bad = PredictionWeights { trend: -0.2, ..WEIGHTS };
        assert!(matches!(bad.validate(), Err(ConfigError::InvertedRange { field: "weights.trend", .. })));
    }

    #[test]
    fn thresholds_ascend() {
        let pressure = PressureThresholds { low: 995.0, medium: 1005.0, high: 1015.0 };
        assert!(pressure.validate().is_ok());

        let swapped = PressureThresholds { low: 1005.0, medium: 995.0, high: 1015.0 };
        assert_eq!(
            swapped.validate(),
            Err(ConfigError::InvertedRange { field: "pressure_thresholds", min: 1005.0, max: 995.0 })
        );
    }

    #[test]
    fn accuracy_is_clamped() {
        assert_eq!(LEARNING.clamp_accuracy(10.0), 30.0);
        assert_eq!(LEARNING.clamp_accuracy(70.0), 70.0);
        assert_eq!(LEARNING.clamp_accuracy(99.0), 95.0);
        assert!(LEARNING.validate().is_ok());
    }

    #[test]
    fn initial_accuracy_inside_bounds() {
        let bad = LearningParams { initial_accuracy_pct: 20.0, ..LEARNING };
        assert!(bad.validate().is_err());

        let bad_rate = LearningParams { learning_rate: 0.0, ..LEARNING };
        assert!(bad_rate.validate().is_err());
    }

    #[test]
    fn history_must_be_kept() {
        let inputs = PredictionInputs {
            weights: WEIGHTS,
            pressure: PressureThresholds { low: 1000.0, medium: 1010.0, high: 1020.0 },
            humidity: Some(HumidityThresholds { low: 70.0, medium: 80.0, high: 85.0 }),
            learning: None,
            history_hours: 24,
        };
        assert!(inputs.validate().is_ok());

        let no_history = PredictionInputs { history_hours: 0, ..inputs };
        assert_eq!(
            no_history.validate(),
            Err(ConfigError::ZeroValue { field: "prediction.history_hours" })
        );
    }
}
