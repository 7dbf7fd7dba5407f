//! Month sources for season lookups
//!
//! Season helpers need "the current month". A deployed station may have an
//! RTC, a GPS fix, or nothing but a millisecond counter since boot. This module
//! abstracts the choice behind [`MonthSource`] so season logic never reads a
//! global clock, and tests can pin the month.
//!
//! ## Uptime estimate
//!
//! Without a calendar the station falls back to counting days since boot:
//!
//! ```text
//! month_index = floor(uptime_ms / 86 400 000) mod 12
//! ```
//!
//! This is a placeholder. It has no relation to the real calendar, resets on
//! every power cycle, and advances one "month" per day of uptime. Use it only
//! when nothing better is wired up.
//!
//! ## Common Implementations
//!
//! - [`UptimeCalendar`]: estimate from any [`UptimeSource`]
//! - [`FixedMonth`]: constant month, for tests and RTC-backed callers
//! - [`FixedUptime`]: controllable uptime counter for tests
//! - [`SystemUptime`]: process uptime from `std::time::Instant` (std only)

use crate::{
    constants::time::{MONTHS_PER_YEAR, MS_PER_DAY},
    month::Month,
};

/// Milliseconds since device boot
pub type Timestamp = u64;

/// Monotonic millisecond counter, typically the `millis()` of the platform
pub trait UptimeSource {
    /// Milliseconds elapsed since boot
    fn uptime_ms(&self) -> Timestamp;
}

impl<F> UptimeSource for F
where
    F: Fn() -> Timestamp,
{
    fn uptime_ms(&self) -> Timestamp {
        self()
    }
}

/// Provider of the current calendar month
pub trait MonthSource {
    /// Current month
    fn current_month(&self) -> Month;
}

/// Coarse month index (0-11) from device uptime
pub const fn estimate_month_index(uptime_ms: Timestamp) -> u8 {
    ((uptime_ms / MS_PER_DAY) % MONTHS_PER_YEAR as u64) as u8
}

/// Month source backed by the uptime estimate
#[derive(Debug, Clone)]
pub struct UptimeCalendar<S> {
    source: S,
}

impl<S: UptimeSource> UptimeCalendar<S> {
    /// Estimate months from `source`
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Underlying uptime source
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: UptimeSource> MonthSource for UptimeCalendar<S> {
    fn current_month(&self) -> Month {
        Month::wrapping_from_zero_based(estimate_month_index(self.source.uptime_ms()) as u64)
    }
}

/// Month source that always reports the same month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMonth(pub Month);

impl MonthSource for FixedMonth {
    fn current_month(&self) -> Month {
        self.0
    }
}

/// Fixed uptime counter for testing
#[derive(Debug, Clone, Default)]
pub struct FixedUptime {
    uptime_ms: Timestamp,
}

impl FixedUptime {
    /// Start the counter at `uptime_ms`
    pub fn new(uptime_ms: Timestamp) -> Self {
        Self { uptime_ms }
    }

    /// Jump to `uptime_ms`
    pub fn set(&mut self, uptime_ms: Timestamp) {
        self.uptime_ms = uptime_ms;
    }

    /// Move the counter forward
    pub fn advance(&mut self, ms: u64) {
        self.uptime_ms = self.uptime_ms.saturating_add(ms);
    }
}

impl UptimeSource for FixedUptime {
    fn uptime_ms(&self) -> Timestamp {
        self.uptime_ms
    }
}

/// Process uptime measured from creation (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemUptime {
    started: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemUptime {
    /// Start counting from now
    pub fn new() -> Self {
        Self {
            started: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SystemUptime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl UptimeSource for SystemUptime {
    fn uptime_ms(&self) -> Timestamp {
        self.started.elapsed().as_millis() as Timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::time::MS_PER_HOUR;

    #[test]
    fn first_day_is_index_zero() {
        assert_eq!(estimate_month_index(0), 0);
        assert_eq!(estimate_month_index(MS_PER_DAY - 1), 0);
        assert_eq!(estimate_month_index(MS_PER_DAY), 1);
    }

    #[test]
    fn index_wraps_every_twelve_days() {
        assert_eq!(estimate_month_index(11 * MS_PER_DAY), 11);
        assert_eq!(estimate_month_index(12 * MS_PER_DAY), 0);
        assert_eq!(estimate_month_index(17 * MS_PER_DAY + 5 * MS_PER_HOUR), 5);
        assert!(estimate_month_index(u64::MAX) < 12);
    }

    #[test]
    fn uptime_calendar_follows_counter() {
        let mut uptime = FixedUptime::new(0);
        assert_eq!(UptimeCalendar::new(uptime.clone()).current_month(), Month::JANUARY);

        uptime.advance(5 * MS_PER_DAY);
        let calendar = UptimeCalendar::new(uptime);
        assert_eq!(calendar.current_month(), Month::JUNE);
        assert_eq!(calendar.source().uptime_ms(), 5 * MS_PER_DAY);
    }

    #[test]
    fn closure_as_uptime_source() {
        let calendar = UptimeCalendar::new(|| 11 * MS_PER_DAY);
        assert_eq!(calendar.current_month(), Month::DECEMBER);
    }

    #[test]
    fn fixed_month() {
        assert_eq!(FixedMonth(Month::AUGUST).current_month(), Month::AUGUST);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_uptime_starts_near_zero() {
        let uptime = SystemUptime::new();
        assert!(uptime.uptime_ms() < MS_PER_DAY);
        assert_eq!(UptimeCalendar::new(uptime).current_month(), Month::JANUARY);
    }
}
