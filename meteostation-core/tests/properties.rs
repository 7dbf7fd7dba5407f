//! Property tests for the numeric helpers

use meteostation_core::{
    correct_by_altitude, estimate_month_index, map_raw, regional_base_pressure, Month, MonthRange,
    MonthSet,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn base_pressure_strictly_decreasing(low in 0.0f32..9_999.0, step in 1.0f32..1_000.0) {
        let high = (low + step).min(10_000.0);
        prop_assume!(high > low);
        prop_assert!(regional_base_pressure(high) < regional_base_pressure(low));
    }

    #[test]
    fn base_pressure_bounded(altitude in 0.0f32..=10_000.0) {
        let pressure = regional_base_pressure(altitude);
        prop_assert!(pressure > 0.0);
        prop_assert!(pressure <= 1013.25);
    }

    #[test]
    fn correction_vanishes_at_sea_level(raw in -50.0f32..50.0, factor in -10.0f32..10.0) {
        prop_assert_eq!(correct_by_altitude(raw, factor, 0.0), raw);
    }

    #[test]
    fn correction_linear_in_altitude(
        raw in -50.0f32..50.0,
        factor in -10.0f32..10.0,
        altitude in 0.0f32..5_000.0,
    ) {
        let single = correct_by_altitude(raw, factor, altitude) - raw;
        let double = correct_by_altitude(raw, factor, altitude * 2.0) - raw;
        prop_assert!((double - 2.0 * single).abs() < 1e-3);
    }

    #[test]
    fn map_raw_non_decreasing(a in -2_000i32..2_000, b in -2_000i32..2_000, out_max in 1i32..1_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mapped_lo = map_raw(lo, 0, 1023, 0, out_max).unwrap();
        let mapped_hi = map_raw(hi, 0, 1023, 0, out_max).unwrap();
        prop_assert!(mapped_lo <= mapped_hi);
        prop_assert!((0..=out_max).contains(&mapped_hi));
    }

    #[test]
    fn month_estimate_in_range(uptime in any::<u64>()) {
        let index = estimate_month_index(uptime);
        prop_assert!(index < 12);
        prop_assert_eq!(Month::wrapping_from_zero_based(index as u64).zero_based(), index);
    }

    #[test]
    fn range_membership_matches_iteration(start in 1u8..=12, end in 1u8..=12, number in 1u8..=12) {
        let range = MonthRange::new(Month::new(start).unwrap(), Month::new(end).unwrap());
        let month = Month::new(number).unwrap();
        prop_assert_eq!(range.contains(month), range.iter().any(|m| m == month));
    }

    #[test]
    fn set_from_range_keeps_membership(start in 1u8..=12, end in 1u8..=12) {
        let range = MonthRange::new(Month::new(start).unwrap(), Month::new(end).unwrap());
        let set = MonthSet::from_range(range);
        prop_assert_eq!(set.len(), range.len());
        for month in Month::all() {
            prop_assert_eq!(set.contains(month), range.contains(month));
        }
    }
}
