//! Calendar months, inclusive month ranges and month sets
//!
//! Every profile uses one convention: months are numbered 1 (January) to
//! 12 (December). Zero-based indices, as produced by the uptime estimator,
//! are converted at the boundary with [`Month::from_zero_based`].

use crate::{
    constants::time::MONTHS_PER_YEAR,
    errors::{ConfigError, ConfigResult},
};

/// Calendar month, 1 = January through 12 = December
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Month(u8);

#[allow(missing_docs)]
impl Month {
    pub const JANUARY: Month = Month(1);
    pub const FEBRUARY: Month = Month(2);
    pub const MARCH: Month = Month(3);
    pub const APRIL: Month = Month(4);
    pub const MAY: Month = Month(5);
    pub const JUNE: Month = Month(6);
    pub const JULY: Month = Month(7);
    pub const AUGUST: Month = Month(8);
    pub const SEPTEMBER: Month = Month(9);
    pub const OCTOBER: Month = Month(10);
    pub const NOVEMBER: Month = Month(11);
    pub const DECEMBER: Month = Month(12);
}

impl Month {
    /// Create a month from its calendar number (1-12)
    pub fn new(number: u8) -> ConfigResult<Self> {
        if (1..=MONTHS_PER_YEAR).contains(&number) {
            Ok(Self(number))
        } else {
            Err(ConfigError::MonthOutOfRange {
                value: number,
                min: 1,
                max: MONTHS_PER_YEAR,
            })
        }
    }

    /// Create a month from a zero-based index (0 = January)
    pub fn from_zero_based(index: u8) -> ConfigResult<Self> {
        if index < MONTHS_PER_YEAR {
            Ok(Self(index + 1))
        } else {
            Err(ConfigError::MonthOutOfRange {
                value: index,
                min: 0,
                max: MONTHS_PER_YEAR - 1,
            })
        }
    }

    /// Create a month from any index, wrapping every twelve
    pub const fn wrapping_from_zero_based(index: u64) -> Self {
        Self((index % MONTHS_PER_YEAR as u64) as u8 + 1)
    }

    /// Calendar number, 1-12
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index, 0-11
    pub const fn zero_based(self) -> u8 {
        self.0 - 1
    }

    /// Following month, December wraps to January
    pub const fn next(self) -> Self {
        Self::wrapping_from_zero_based(self.0 as u64)
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=MONTHS_PER_YEAR).map(Month)
    }
}

impl TryFrom<u8> for Month {
    type Error = ConfigError;

    fn try_from(number: u8) -> ConfigResult<Self> {
        Self::new(number)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> u8 {
        month.number()
    }
}

/// Inclusive range of months
///
/// A range whose start comes after its end wraps over the new year, so
/// December–January covers exactly those two months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthRange {
    /// First month of the range
    pub start: Month,
    /// Last month of the range, inclusive
    pub end: Month,
}

impl MonthRange {
    /// Create a range from `start` to `end`, both inclusive
    pub const fn new(start: Month, end: Month) -> Self {
        Self { start, end }
    }

    /// Check whether the range wraps over December
    pub const fn wraps(&self) -> bool {
        self.start.0 > self.end.0
    }

    /// Check if `month` lies within the range, boundaries included
    pub const fn contains(&self, month: Month) -> bool {
        if self.wraps() {
            month.0 >= self.start.0 || month.0 <= self.end.0
        } else {
            month.0 >= self.start.0 && month.0 <= self.end.0
        }
    }

    /// Number of months covered
    pub const fn len(&self) -> u8 {
        if self.wraps() {
            MONTHS_PER_YEAR - self.start.0 + self.end.0 + 1
        } else {
            self.end.0 - self.start.0 + 1
        }
    }

    /// Months in the range, starting with `start`
    pub fn iter(&self) -> impl Iterator<Item = Month> {
        let start = self.start;
        (0..self.len() as u64).map(move |offset| {
            Month::wrapping_from_zero_based(start.zero_based() as u64 + offset)
        })
    }
}

/// Arbitrary set of months
///
/// Covers seasons that are not one contiguous run, such as a cold season of
/// December and February with a milder January between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthSet(u16);

impl MonthSet {
    /// Set with no months
    pub const EMPTY: Self = Self(0);

    /// Every month of `range`
    pub const fn from_range(range: MonthRange) -> Self {
        let mut set = Self::EMPTY;
        let mut month = range.start;
        let mut remaining = range.len();
        while remaining > 0 {
            set = set.with(month);
            month = month.next();
            remaining -= 1;
        }
        set
    }

    /// This set plus `month`
    pub const fn with(self, month: Month) -> Self {
        Self(self.0 | (1u16 << month.zero_based()))
    }

    /// Check if `month` is in the set
    pub const fn contains(&self, month: Month) -> bool {
        (self.0 & (1u16 << month.zero_based())) != 0
    }

    /// Number of months in the set
    pub const fn len(&self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Check if the set has no months
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Months in the set, in calendar order
    pub fn iter(&self) -> impl Iterator<Item = Month> {
        let set = *self;
        Month::all().filter(move |m| set.contains(*m))
    }
}

impl From<MonthRange> for MonthSet {
    fn from(range: MonthRange) -> Self {
        Self::from_range(range)
    }
}

// Serialized as the ascending list of month numbers
#[cfg(feature = "serde")]
impl serde::Serialize for MonthSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
