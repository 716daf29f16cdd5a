//! United States holiday table and per-year driver.
//!
//! One table holds every rule.  The driver resolves it for a year in a
//! fixed order: the nine fixed holidays first (a weekend date of an
//! observed holiday also emits a shifted "(Observed)" twin right after
//! the actual date), then Easter, then the six Nth-weekday holidays.

use hc_core::ensure;
use hc_core::errors::Result;
use hc_core::Year;
use hc_time::easter::easter;
use hc_time::{Month, Weekday};

use crate::observance::{observed_date, observed_title};
use crate::occurrence::Occurrence;
use crate::rule::{HolidayRule, Nth};

/// Title used for the Easter occurrence.
pub const EASTER_TITLE: &str = "Easter";

/// The United States holiday table.
///
/// Fixed entries first, in calendar order; the `observed` flag marks the
/// federal holidays whose weekend dates shift to the nearest weekday.
/// The Nth-weekday entries follow, also in calendar order.
pub const US_HOLIDAYS: &[HolidayRule] = &[
    HolidayRule::Fixed {
        title: "New Years Day",
        month: Month::January,
        day: 1,
        observed: true,
    },
    HolidayRule::Fixed {
        title: "Valentine's Day",
        month: Month::February,
        day: 14,
        observed: false,
    },
    HolidayRule::Fixed {
        title: "St. Patrick's Day",
        month: Month::March,
        day: 17,
        observed: false,
    },
    HolidayRule::Fixed {
        title: "Independence Day",
        month: Month::July,
        day: 4,
        observed: true,
    },
    HolidayRule::Fixed {
        title: "Halloween",
        month: Month::October,
        day: 31,
        observed: false,
    },
    HolidayRule::Fixed {
        title: "Veterans Day",
        month: Month::November,
        day: 11,
        observed: true,
    },
    HolidayRule::Fixed {
        title: "Christmas Eve",
        month: Month::December,
        day: 24,
        observed: false,
    },
    HolidayRule::Fixed {
        title: "Christmas",
        month: Month::December,
        day: 25,
        observed: true,
    },
    HolidayRule::Fixed {
        title: "New Years Eve",
        month: Month::December,
        day: 31,
        observed: false,
    },
    HolidayRule::NthWeekday {
        title: "MLK Jr. Day",
        nth: Nth::Third,
        weekday: Weekday::Monday,
        month: Month::January,
    },
    HolidayRule::NthWeekday {
        title: "Presidents' Day",
        nth: Nth::Third,
        weekday: Weekday::Monday,
        month: Month::February,
    },
    HolidayRule::NthWeekday {
        title: "Memorial Day",
        nth: Nth::Last,
        weekday: Weekday::Monday,
        month: Month::May,
    },
    HolidayRule::NthWeekday {
        title: "Labor Day",
        nth: Nth::First,
        weekday: Weekday::Monday,
        month: Month::September,
    },
    HolidayRule::NthWeekday {
        title: "Columbus Day",
        nth: Nth::Second,
        weekday: Weekday::Monday,
        month: Month::October,
    },
    HolidayRule::NthWeekday {
        title: "Thanksgiving Day",
        nth: Nth::Fourth,
        weekday: Weekday::Thursday,
        month: Month::November,
    },
];

/// Compute every holiday occurrence for one year.
///
/// The sequence is deterministic: fixed holidays in table order (each
/// observed twin directly after its actual date), then Easter, then the
/// Nth-weekday holidays in table order.  Rebuilding the same year yields
/// an identical sequence.
pub fn holidays_for_year(year: Year) -> Result<Vec<Occurrence>> {
    let mut occurrences = Vec::new();

    for rule in US_HOLIDAYS {
        if let HolidayRule::Fixed { observed, .. } = *rule {
            let date = rule.resolve(year)?;
            occurrences.push(Occurrence::all_day(rule.title(), date)?);
            if observed {
                if let Some(shifted) = observed_date(date)? {
                    occurrences.push(Occurrence::all_day(observed_title(rule.title()), shifted)?);
                }
            }
        }
    }

    occurrences.push(Occurrence::all_day(EASTER_TITLE, easter(year)?)?);

    for rule in US_HOLIDAYS {
        if matches!(rule, HolidayRule::NthWeekday { .. }) {
            occurrences.push(Occurrence::all_day(rule.title(), rule.resolve(year)?)?);
        }
    }

    Ok(occurrences)
}

/// Compute occurrences for several years, concatenated in input order.
///
/// Years are computed independently; all of one year's occurrences
/// precede the next year's.  Any year outside the Easter validity window
/// fails the whole batch.
pub fn holidays_for_years(years: &[Year]) -> Result<Vec<Occurrence>> {
    ensure!(!years.is_empty(), "at least one year is required");
    let mut all = Vec::new();
    for &year in years {
        all.extend(holidays_for_year(year)?);
    }
    Ok(all)
}
