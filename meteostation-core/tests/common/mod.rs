//! Shared fixtures for integration tests
//!
//! Readings and profiles that several test files build on.

#![allow(dead_code)]

use meteostation_core::{Reading, StationProfile, REGIONAL};

/// Typical rainy-season afternoon at the highland site
pub const RAINY_AFTERNOON: Reading = Reading {
    temperature_c: 17.5,
    humidity_pct: 88.0,
    pressure_hpa: 1002.0,
    dew_point_c: Some(15.4),
};

/// Clear, dry winter morning
pub const FROSTY_MORNING: Reading = Reading {
    temperature_c: 3.5,
    humidity_pct: 58.0,
    pressure_hpa: 1021.0,
    dew_point_c: Some(-4.0),
};

/// Regional profile moved to sea level
pub fn coastal_profile() -> StationProfile {
    let mut profile = REGIONAL;
    profile.id = "coastal";
    profile.location.altitude_m = 0.0;
    profile
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
