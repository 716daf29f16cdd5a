//! `HolidayRule` — the shapes a holiday definition can take.
//!
//! Two shapes cover the whole United States table: a fixed month/day
//! repeated every year, and "the *n*-th given weekday of a given month".
//! Easter is computed separately by the calendar driver, since it is the
//! only entry whose month depends on the year.

use hc_core::errors::Result;
use hc_core::Year;
use hc_time::{Date, Month, Weekday};

/// Which occurrence of a weekday within a month a rule selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nth {
    /// First occurrence.
    First,
    /// Second occurrence.
    Second,
    /// Third occurrence.
    Third,
    /// Fourth occurrence.
    Fourth,
    /// Last occurrence (the fourth or the fifth, whichever still falls
    /// inside the month).
    Last,
}

impl Nth {
    fn resolve(self, weekday: Weekday, year: Year, month: Month) -> Result<Date> {
        match self {
            Nth::First => Date::nth_weekday(1, weekday, year, month.number()),
            Nth::Second => Date::nth_weekday(2, weekday, year, month.number()),
            Nth::Third => Date::nth_weekday(3, weekday, year, month.number()),
            Nth::Fourth => Date::nth_weekday(4, weekday, year, month.number()),
            Nth::Last => Date::last_weekday(weekday, year, month.number()),
        }
    }
}

impl std::fmt::Display for Nth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Nth::First => "1st",
            Nth::Second => "2nd",
            Nth::Third => "3rd",
            Nth::Fourth => "4th",
            Nth::Last => "last",
        };
        write!(f, "{name}")
    }
}

/// One holiday definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// The same month and day every year.
    Fixed {
        /// Event title.
        title: &'static str,
        /// Month of the holiday.
        month: Month,
        /// Day of the month.
        day: u8,
        /// Whether a weekend date earns a shifted "(Observed)" twin.
        observed: bool,
    },
    /// The *n*-th occurrence of a weekday within a month.
    NthWeekday {
        /// Event title.
        title: &'static str,
        /// Which occurrence within the month.
        nth: Nth,
        /// Day of the week the rule selects.
        weekday: Weekday,
        /// Month of the holiday.
        month: Month,
    },
}

impl HolidayRule {
    /// Event title used for occurrences of this rule.
    pub fn title(&self) -> &'static str {
        match self {
            HolidayRule::Fixed { title, .. } | HolidayRule::NthWeekday { title, .. } => title,
        }
    }

    /// Resolve the rule to its concrete date in `year`.
    pub fn resolve(&self, year: Year) -> Result<Date> {
        match *self {
            HolidayRule::Fixed { month, day, .. } => Date::from_ymd(year, month.number(), day),
            HolidayRule::NthWeekday {
                nth,
                weekday,
                month,
                ..
            } => nth.resolve(weekday, year, month),
        }
    }
}
