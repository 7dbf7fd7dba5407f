//! Configuration core for a regional weather station
//!
//! Climate baselines, sensor wiring, calibration factors and display text of
//! a small highland station, plus the pure helpers the firmware needs around
//! them: barometric base pressure, season lookup, altitude corrections,
//! raw-value mapping and a month estimate from uptime.
//!
//! Key constraints:
//! - `no_std`, no heap allocation
//! - Every profile is `const` data, validated once at startup
//! - No global clock: the current month is injected through [`MonthSource`]
//!
//! ```no_run
//! use meteostation_core::{Month, StationConfig, UptimeCalendar};
//!
//! let config = StationConfig::calibration().unwrap();
//! let clock = UptimeCalendar::new(|| 42_000_u64);
//!
//! if config.is_rainy_season_now(&clock) {
//!     let bonus = config.seasonal_rain_bonus(Month::JULY);
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

mod checks;

pub mod alerts;
pub mod barometric;
pub mod calendar;
pub mod climate;
pub mod constants;
pub mod corrections;
pub mod errors;
pub mod mapping;
pub mod month;
pub mod prediction;
pub mod presets;
pub mod profile;
pub mod seasons;
pub mod settings;
pub mod station;
pub mod text;
pub mod wiring;

// Public API
pub use alerts::{Alert, AlertThresholds, Reading, SensorOffsets};
pub use barometric::{pressure_at_altitude, regional_base_pressure};
pub use calendar::{
    estimate_month_index, FixedMonth, FixedUptime, MonthSource, Timestamp, UptimeCalendar,
    UptimeSource,
};
#[cfg(feature = "std")]
pub use calendar::SystemUptime;
pub use corrections::{correct_by_altitude, AltitudeCorrections, Quantity};
pub use errors::{ConfigError, ConfigResult};
pub use mapping::{map_raw, LinearMap};
pub use month::{Month, MonthRange, MonthSet};
pub use presets::{CALIBRATION, REGIONAL, UV_CALIBRATION_FACTOR};
pub use profile::StationProfile;
pub use seasons::{Season, SeasonCalendar};
pub use station::StationConfig;
pub use text::{to_lcd_ascii, Label, LabelSet};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
