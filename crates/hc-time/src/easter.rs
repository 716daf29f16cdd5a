//! Date of Easter Sunday.
//!
//! Closed-form congruential method: a handful of modular expressions
//! place Easter directly in March or April, with no lookup table.  The
//! method is meaningful for Gregorian years 1583–4099 only; years outside
//! that window are rejected rather than answered wrongly.

use crate::date::Date;
use hc_core::errors::{Error, Result};
use hc_core::Year;

/// First year for which the Easter computation is valid.
pub const EASTER_MIN_YEAR: Year = 1583;

/// Last year for which the Easter computation is valid.
pub const EASTER_MAX_YEAR: Year = 4099;

/// Day of Easter Sunday counted within a combined March–April span:
/// March `q` when `q < 32`, otherwise April `q - 31`.
fn carters_q(year: Year) -> u32 {
    let y = u32::from(year);
    let b = 225 - 11 * (y % 19);
    let mut d = ((b - 21) % 30) + 21;
    if d > 48 {
        d -= 1;
    }
    let e = (y + y / 4 + d + 1) % 7;
    d + 7 - e
}

/// Day-of-year ordinal (1-based) of Easter Sunday in `year`.
///
/// # Errors
/// Returns [`Error::YearOutOfRange`] for years outside 1583–4099.
pub fn easter_day_of_year(year: Year) -> Result<u16> {
    if !(EASTER_MIN_YEAR..=EASTER_MAX_YEAR).contains(&year) {
        return Err(Error::YearOutOfRange {
            year,
            min: EASTER_MIN_YEAR,
            max: EASTER_MAX_YEAR,
        });
    }
    let q = carters_q(year);
    let (month, day) = if q < 32 { (3, q as u8) } else { (4, (q - 31) as u8) };
    Ok(Date::from_ymd(year, month, day)?.day_of_year())
}

/// Date of Easter Sunday in `year`.
///
/// # Errors
/// Returns [`Error::YearOutOfRange`] for years outside 1583–4099.
pub fn easter(year: Year) -> Result<Date> {
    let ordinal = easter_day_of_year(year)?;
    Date::from_year_ordinal(year, ordinal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn known_dates() {
        assert_eq!(easter(2020).unwrap(), date(2020, 4, 12));
        assert_eq!(easter(2021).unwrap(), date(2021, 4, 4));
        assert_eq!(easter(2023).unwrap(), date(2023, 4, 9));
        assert_eq!(easter(2024).unwrap(), date(2024, 3, 31));
        assert_eq!(easter(2025).unwrap(), date(2025, 4, 20));
    }

    #[test]
    fn known_dates_corrected_branch() {
        // Years where the raw epact lands past 48 and gets pulled back a day
        assert_eq!(easter(2000).unwrap(), date(2000, 4, 23));
        assert_eq!(easter(1981).unwrap(), date(1981, 4, 19));
    }

    #[test]
    fn century_years() {
        assert_eq!(easter(1900).unwrap(), date(1900, 4, 15));
    }

    #[test]
    fn day_of_year_matches_date() {
        for year in [1900u16, 1981, 2000, 2020, 2021, 2023, 2024, 2025] {
            let d = easter(year).unwrap();
            assert_eq!(d.day_of_year(), easter_day_of_year(year).unwrap());
        }
    }

    #[test]
    fn always_a_sunday() {
        for year in 1900..=2099u16 {
            let d = easter(year).unwrap();
            assert_eq!(d.weekday(), Weekday::Sunday, "Easter {year} fell on {d}");
        }
    }

    #[test]
    fn march_or_april_only() {
        for year in 1900..=2099u16 {
            let d = easter(year).unwrap();
            assert!(d.month() == 3 || d.month() == 4, "Easter {year} was {d}");
        }
    }

    #[test]
    fn out_of_range_years() {
        assert_eq!(
            easter(1582),
            Err(Error::YearOutOfRange {
                year: 1582,
                min: 1583,
                max: 4099
            })
        );
        assert!(easter(4100).is_err());
        assert!(easter_day_of_year(0).is_err());
    }

    #[test]
    fn range_bounds_accepted() {
        assert!(easter(1583).is_ok());
        assert!(easter(4099).is_ok());
    }
}
