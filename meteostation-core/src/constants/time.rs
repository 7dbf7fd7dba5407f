//! Time-Related Constants
//!
//! Unit conversions used by the uptime month estimator and timing settings.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: u64 = 60;

/// Hours per day.
pub const HOURS_PER_DAY: u64 = 24;

/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = MS_PER_SECOND * SECONDS_PER_MINUTE;

/// Milliseconds per hour.
pub const MS_PER_HOUR: u64 = MS_PER_MINUTE * MINUTES_PER_HOUR;

/// Milliseconds per day (86 400 000).
pub const MS_PER_DAY: u64 = MS_PER_HOUR * HOURS_PER_DAY;

// ===== CALENDAR =====

/// Months per year.
pub const MONTHS_PER_YEAR: u8 = 12;
