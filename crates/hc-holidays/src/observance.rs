//! Weekend observance shifts for fixed holidays.
//!
//! Federal convention: a holiday falling on Saturday is observed the
//! preceding Friday, one falling on Sunday the following Monday.  The
//! shift steps through plain calendar arithmetic, so a Saturday
//! January 1 observes December 31 of the prior year.

use hc_core::errors::Result;
use hc_time::{Date, Weekday};

/// Suffix appended to the title of a shifted occurrence.
const OBSERVED_SUFFIX: &str = " (Observed)";

/// The date on which a weekend holiday is observed, if a shift applies.
///
/// Returns `Ok(None)` for Monday–Friday dates.
pub fn observed_date(date: Date) -> Result<Option<Date>> {
    match date.weekday() {
        Weekday::Saturday => date.previous_day().map(Some),
        Weekday::Sunday => date.next_day().map(Some),
        _ => Ok(None),
    }
}

/// Title for the shifted twin of an observed holiday.
pub fn observed_title(title: &str) -> String {
    format!("{title}{OBSERVED_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn saturday_shifts_back() {
        // 2020-07-04 is a Saturday
        assert_eq!(
            observed_date(date(2020, 7, 4)).unwrap(),
            Some(date(2020, 7, 3))
        );
        // 2021-12-25 is a Saturday
        assert_eq!(
            observed_date(date(2021, 12, 25)).unwrap(),
            Some(date(2021, 12, 24))
        );
    }

    #[test]
    fn sunday_shifts_forward() {
        // 2021-07-04 is a Sunday
        assert_eq!(
            observed_date(date(2021, 7, 4)).unwrap(),
            Some(date(2021, 7, 5))
        );
        // 2022-12-25 is a Sunday
        assert_eq!(
            observed_date(date(2022, 12, 25)).unwrap(),
            Some(date(2022, 12, 26))
        );
    }

    #[test]
    fn weekday_needs_no_shift() {
        // 2023-07-04 is a Tuesday
        assert_eq!(observed_date(date(2023, 7, 4)).unwrap(), None);
        // 2024-12-25 is a Wednesday
        assert_eq!(observed_date(date(2024, 12, 25)).unwrap(), None);
    }

    #[test]
    fn new_years_saturday_lands_in_prior_year() {
        // 2022-01-01 is a Saturday; observance is 2021-12-31
        assert_eq!(
            observed_date(date(2022, 1, 1)).unwrap(),
            Some(date(2021, 12, 31))
        );
    }

    #[test]
    fn title_suffix() {
        assert_eq!(observed_title("Christmas"), "Christmas (Observed)");
    }
}
