//! Linear Altitude Corrections
//!
//! Sea-level referenced quantities are shifted to the site altitude with an
//! empirical factor per 1000 m:
//!
//! ```text
//! corrected = raw + (altitude_m / 1000) × factor_per_1000m
//! ```
//!
//! Typical factors:
//! - Temperature: −6.5 °C/1000 m (standard lapse rate)
//! - Pressure:    +0.12 hPa/1000 m (site calibration)
//! - Dew point:   −2.0 °C/1000 m
//!
//! The correction is zero at sea level and linear in altitude.

/// Apply a per-1000 m correction factor to a raw value
pub fn correct_by_altitude(raw: f32, factor_per_1000m: f32, altitude_m: f32) -> f32 {
    raw + (altitude_m / 1000.0) * factor_per_1000m
}

/// Quantity that has its own correction factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Quantity {
    /// Air temperature (°C)
    Temperature,
    /// Atmospheric pressure (hPa)
    Pressure,
    /// Dew point (°C)
    DewPoint,
}

/// Correction factors per 1000 m of altitude
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AltitudeCorrections {
    /// Temperature factor (°C per 1000 m)
    pub temperature_per_km: f32,
    /// Pressure factor (hPa per 1000 m)
    pub pressure_per_km: f32,
    /// Dew point factor (°C per 1000 m)
    pub dew_point_per_km: f32,
}

impl AltitudeCorrections {
    /// No correction for any quantity
    pub const NONE: Self = Self {
        temperature_per_km: 0.0,
        pressure_per_km: 0.0,
        dew_point_per_km: 0.0,
    };

    /// Factor configured for `quantity`
    pub const fn factor(&self, quantity: Quantity) -> f32 {
        match quantity {
            Quantity::Temperature => self.temperature_per_km,
            Quantity::Pressure => self.pressure_per_km,
            Quantity::DewPoint => self.dew_point_per_km,
        }
    }

    /// Correct any quantity for a site at `altitude_m`
    pub fn correct(&self, quantity: Quantity, raw: f32, altitude_m: f32) -> f32 {
        correct_by_altitude(raw, self.factor(quantity), altitude_m)
    }

    /// Correct a temperature (°C)
    pub fn temperature(&self, raw_c: f32, altitude_m: f32) -> f32 {
        self.correct(Quantity::Temperature, raw_c, altitude_m)
    }

    /// Correct a pressure (hPa)
    pub fn pressure(&self, raw_hpa: f32, altitude_m: f32) -> f32 {
        self.correct(Quantity::Pressure, raw_hpa, altitude_m)
    }

    /// Correct a dew point (°C)
    pub fn dew_point(&self, raw_c: f32, altitude_m: f32) -> f32 {
        self.correct(Quantity::DewPoint, raw_c, altitude_m)
    }

    pub(crate) fn all_finite(&self) -> bool {
        self.temperature_per_km.is_finite()
            && self.pressure_per_km.is_finite()
            && self.dew_point_per_km.is_finite()
    }
}

impl Default for AltitudeCorrections {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIGHLAND: AltitudeCorrections = AltitudeCorrections {
        temperature_per_km: -6.5,
        pressure_per_km: 0.12,
        dew_point_per_km: -2.0,
    };

    #[test]
    fn zero_at_sea_level() {
        assert_eq!(correct_by_altitude(21.0, -6.5, 0.0), 21.0);
        assert_eq!(HIGHLAND.pressure(1005.0, 0.0), 1005.0);
    }

    #[test]
    fn temperature_at_highland_site() {
        let corrected = HIGHLAND.temperature(20.0, 2219.0);
        // 2.219 × −6.5 = −14.4235
        assert!((corrected - (20.0 - 14.4235)).abs() < 1e-3);
    }

    #[test]
    fn pressure_and_dew_point_factors() {
        assert!((HIGHLAND.pressure(1000.0, 2219.0) - 1000.26628).abs() < 1e-3);
        assert!((HIGHLAND.dew_point(10.0, 2219.0) - 5.562).abs() < 1e-3);
    }

    #[test]
    fn none_is_identity() {
        for quantity in [Quantity::Temperature, Quantity::Pressure, Quantity::DewPoint] {
            assert_eq!(AltitudeCorrections::NONE.correct(quantity, 12.5, 4000.0), 12.5);
        }
    }
}
