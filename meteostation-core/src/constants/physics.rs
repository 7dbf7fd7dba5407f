//! Physical Constants for Meteostation
//!
//! Values of the International Standard Atmosphere (ISA) used by the
//! barometric formula and the altitude band a profile may be deployed at.

// ===== STANDARD ATMOSPHERE =====

/// Standard atmospheric pressure at sea level (hPa/mbar).
///
/// Reference pressure for the regional base pressure calculation.
///
/// Source: International Standard Atmosphere (ISA)
pub const SEA_LEVEL_PRESSURE_HPA: f32 = 1013.25;

/// Standard temperature at sea level (K).
///
/// 15°C, the global average used in aviation.
///
/// Source: International Standard Atmosphere (ISA)
pub const STANDARD_TEMPERATURE_K: f32 = 288.15;

/// Temperature lapse rate in the troposphere (K/m).
///
/// 6.5°C per 1000 m.
///
/// Source: International Standard Atmosphere (ISA)
pub const TEMPERATURE_LAPSE_K_PER_M: f32 = 0.0065;

/// Exponent of the barometric formula, g·M / (R·L).
///
/// Rounded to the value used in most weather-station firmware.
pub const BAROMETRIC_EXPONENT: f32 = 5.255;

// ===== DEPLOYMENT LIMITS =====

/// Lowest supported site altitude (m).
pub const ALTITUDE_MIN_M: f32 = 0.0;

/// Highest supported site altitude (m).
///
/// Well inside the troposphere (11 km), where the formula holds.
pub const ALTITUDE_MAX_M: f32 = 10_000.0;

/// Upper bound for relative humidity (%).
pub const HUMIDITY_MAX_PCT: f32 = 100.0;
