//! Season classification by month
//!
//! No calendar library is involved. The rainy season is a closed month range
//! and always defined. Hot and cold seasons are optional month sets because
//! not every site records them, and one site's cold months are not contiguous.
//!
//! When ranges overlap the categorical label follows a fixed priority:
//! Rainy > Hot > Cold > Mild. Rain dominates because it drives the forecast.

use crate::month::{Month, MonthRange, MonthSet};

/// Added to the rain probability during the rainy season (percentage points)
pub const RAINY_SEASON_BONUS_PCT: f32 = 10.0;

/// Categorical season label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Season {
    /// Within the rainy season
    Rainy,
    /// Within the hot season
    Hot,
    /// Within the cold season
    Cold,
    /// None of the above
    Mild,
}

/// Seasonal month ranges of a site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SeasonCalendar {
    /// Rainy season, inclusive
    pub rainy: MonthRange,
    /// Warmest months, if recorded
    pub hot: Option<MonthSet>,
    /// Coldest months, if recorded
    pub cold: Option<MonthSet>,
    /// Month with the most rain, if recorded
    pub peak_rain: Option<Month>,
    /// Month with the least rain, if recorded
    pub driest: Option<Month>,
}

impl SeasonCalendar {
    /// Check if `month` is in the rainy season, boundaries included
    pub const fn is_rainy(&self, month: Month) -> bool {
        self.rainy.contains(month)
    }

    /// Check if `month` is in the hot season; false when none is recorded
    pub const fn is_hot(&self, month: Month) -> bool {
        match self.hot {
            Some(months) => months.contains(month),
            None => false,
        }
    }

    /// Check if `month` is in the cold season; false when none is recorded
    pub const fn is_cold(&self, month: Month) -> bool {
        match self.cold {
            Some(months) => months.contains(month),
            None => false,
        }
    }

    /// Categorical label for `month`
    pub const fn classify(&self, month: Month) -> Season {
        if self.is_rainy(month) {
            Season::Rainy
        } else if self.is_hot(month) {
            Season::Hot
        } else if self.is_cold(month) {
            Season::Cold
        } else {
            Season::Mild
        }
    }

    /// Rain probability bonus for `month` (percentage points)
    pub const fn rain_bonus(&self, month: Month) -> f32 {
        if self.is_rainy(month) {
            RAINY_SEASON_BONUS_PCT
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIGHLAND: SeasonCalendar = SeasonCalendar {
        rainy: MonthRange::new(Month::JUNE, Month::SEPTEMBER),
        hot: Some(MonthSet::from_range(MonthRange::new(Month::APRIL, Month::MAY))),
        cold: Some(MonthSet::from_range(MonthRange::new(Month::DECEMBER, Month::JANUARY))),
        peak_rain: Some(Month::SEPTEMBER),
        driest: Some(Month::JANUARY),
    };

    #[test]
    fn rainy_boundaries() {
        assert!(!HIGHLAND.is_rainy(Month::MAY));
        assert!(HIGHLAND.is_rainy(Month::JUNE));
        assert!(HIGHLAND.is_rainy(Month::SEPTEMBER));
        assert!(!HIGHLAND.is_rainy(Month::OCTOBER));
    }

    #[test]
    fn classify_every_month() {
        let labels: heapless::Vec<Season, 12> = Month::all().map(|m| HIGHLAND.classify(m)).collect();
        assert_eq!(
            labels.as_slice(),
            &[
                Season::Cold,  // Jan
                Season::Mild,  // Feb
                Season::Mild,  // Mar
                Season::Hot,   // Apr
                Season::Hot,   // May
                Season::Rainy, // Jun
                Season::Rainy, // Jul
                Season::Rainy, // Aug
                Season::Rainy, // Sep
                Season::Mild,  // Oct
                Season::Mild,  // Nov
                Season::Cold,  // Dec
            ]
        );
    }

    #[test]
    fn rain_wins_overlaps() {
        let overlapping = SeasonCalendar {
            hot: Some(MonthSet::from_range(MonthRange::new(Month::APRIL, Month::JUNE))),
            ..HIGHLAND
        };
        assert!(overlapping.is_hot(Month::JUNE));
        assert_eq!(overlapping.classify(Month::JUNE), Season::Rainy);
    }

    #[test]
    fn missing_ranges_are_never_active() {
        let rain_only = SeasonCalendar { hot: None, cold: None, ..HIGHLAND };
        assert!(Month::all().all(|m| !rain_only.is_hot(m) && !rain_only.is_cold(m)));
    }

    #[test]
    fn bonus_only_when_rainy() {
        assert_eq!(HIGHLAND.rain_bonus(Month::JULY), RAINY_SEASON_BONUS_PCT);
        assert_eq!(HIGHLAND.rain_bonus(Month::MARCH), 0.0);
    }

    #[test]
    fn split_cold_season() {
        let split = SeasonCalendar {
            cold: Some(MonthSet::EMPTY.with(Month::DECEMBER).with(Month::FEBRUARY)),
            ..HIGHLAND
        };
        assert_eq!(split.classify(Month::DECEMBER), Season::Cold);
        assert_eq!(split.classify(Month::JANUARY), Season::Mild);
        assert_eq!(split.classify(Month::FEBRUARY), Season::Cold);
    }
}
