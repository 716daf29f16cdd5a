//! Property tests for date arithmetic.

use proptest::prelude::*;

use hc_time::date::{days_in_month, days_in_year};
use hc_time::{Date, Weekday};

proptest! {
    #[test]
    fn ordinal_roundtrip(year in 1u16..=9999, ordinal in 1u16..=365) {
        let d = Date::from_year_ordinal(year, ordinal).unwrap();
        prop_assert_eq!(d.day_of_year(), ordinal);
        let back = Date::from_ymd(d.year(), d.month(), d.day_of_month()).unwrap();
        prop_assert_eq!(back, d);
    }

    #[test]
    fn step_roundtrip(year in 2u16..=9998, ordinal in 1u16..=365) {
        let d = Date::from_year_ordinal(year, ordinal).unwrap();
        prop_assert_eq!(d.next_day().unwrap().previous_day().unwrap(), d);
        prop_assert_eq!(d.previous_day().unwrap().next_day().unwrap(), d);
    }

    #[test]
    fn next_day_moves_weekday_by_one(year in 1u16..=9998, ordinal in 1u16..=365) {
        let d = Date::from_year_ordinal(year, ordinal).unwrap();
        let next = d.next_day().unwrap();
        prop_assert_eq!(next.weekday().index(), (d.weekday().index() + 1) % 7);
        prop_assert!(d < next);
    }

    #[test]
    fn month_lengths_sum_to_year(year in 1u16..=9999) {
        let total: u16 = (1..=12u8).map(|m| u16::from(days_in_month(year, m))).sum();
        prop_assert_eq!(total, days_in_year(year));
    }

    #[test]
    fn nth_weekday_lands_correctly(
        year in 1u16..=9999,
        month in 1u8..=12,
        n in 1u8..=5,
        index in 0u8..=6,
    ) {
        let weekday = Weekday::from_index(index).unwrap();
        if let Ok(d) = Date::nth_weekday(n, weekday, year, month) {
            prop_assert_eq!(d.weekday(), weekday);
            prop_assert_eq!(d.month(), month);
            prop_assert_eq!(d.year(), year);
            // The n-th occurrence sits in the n-th seven-day window
            prop_assert!(d.day_of_month() > 7 * (n - 1));
            prop_assert!(d.day_of_month() <= 7 * n);
        }
    }

    #[test]
    fn last_weekday_is_final(year in 1u16..=9999, month in 1u8..=12, index in 0u8..=6) {
        let weekday = Weekday::from_index(index).unwrap();
        let d = Date::last_weekday(weekday, year, month).unwrap();
        prop_assert_eq!(d.weekday(), weekday);
        prop_assert_eq!(d.month(), month);
        // No later occurrence fits inside the month
        prop_assert!(days_in_month(year, month) - d.day_of_month() < 7);
    }
}
