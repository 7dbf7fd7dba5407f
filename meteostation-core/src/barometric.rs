//! Regional Base Pressure from the Barometric Formula
//!
//! ## Physics Background
//!
//! Pressure decreases with altitude following the barometric formula for the
//! troposphere:
//!
//! ```text
//! P(h) = P₀ × (1 - L×h/T₀)^5.255
//!
//! Where:
//! - P₀ = sea level pressure (1013.25 hPa)
//! - L  = temperature lapse rate (0.0065 K/m)
//! - h  = altitude (m)
//! - T₀ = sea level temperature (288.15 K)
//! ```
//!
//! A station at altitude never sees sea-level pressure, so every
//! pressure-based threshold is judged against this base value instead.
//!
//! ```text
//! Altitude   Base pressure
//! ------------------------
//! 0 m        1013.25 hPa
//! 1000 m      898.8 hPa
//! 2219 m      773.6 hPa
//! ```
//!
//! The power uses `libm::powf` so the crate stays `no_std` on targets
//! without a hardware FPU.

use crate::constants::physics::{
    BAROMETRIC_EXPONENT, SEA_LEVEL_PRESSURE_HPA, STANDARD_TEMPERATURE_K,
    TEMPERATURE_LAPSE_K_PER_M,
};

/// Pressure expected at `altitude_m` for a given sea-level reference (hPa)
///
/// Valid below the tropopause. The base term reaches zero at ~44 km, far
/// outside the supported altitude band.
pub fn pressure_at_altitude(altitude_m: f32, sea_level_hpa: f32) -> f32 {
    let base = 1.0 - (TEMPERATURE_LAPSE_K_PER_M * altitude_m) / STANDARD_TEMPERATURE_K;
    sea_level_hpa * libm::powf(base, BAROMETRIC_EXPONENT)
}

/// Regional base pressure for a site at `altitude_m`, standard sea level (hPa)
pub fn regional_base_pressure(altitude_m: f32) -> f32 {
    pressure_at_altitude(altitude_m, SEA_LEVEL_PRESSURE_HPA)
}
