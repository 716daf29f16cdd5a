//! `Date` type and month-length helpers.
//!
//! Dates are stored as explicit year/month/day fields and are valid by
//! construction.  There is no serial-number representation: the day of
//! the week comes from a fixed per-month offset congruence and stepping
//! to an adjacent day is a small rollover, so nothing here needs a day
//! count from an epoch, and no epoch bound narrows the year range.

use crate::month::Month;
use crate::weekday::Weekday;
use hc_core::errors::{Error, Result};
use hc_core::Year;

// ── Month-length helpers ──────────────────────────────────────────────────────

/// Days in each month of a non-leap year, indexed by `month - 1`.
const MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Per-month offsets for the day-of-week congruence, indexed by `month - 1`.
const WEEKDAY_OFFSETS: [u8; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    if month == 2 && is_leap_year(year) {
        29
    } else {
        MONTH_LENGTHS[month as usize - 1]
    }
}

/// Number of days in a given year (365 or 366).
pub fn days_in_year(year: Year) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

// ── Date ──────────────────────────────────────────────────────────────────────

/// A proleptic-Gregorian calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: Year,
    month: u8,
    day: u8,
}

impl Date {
    /// Earliest representable year.
    pub const MIN_YEAR: Year = 1;

    /// Latest representable year.  Four digits is the widest year the
    /// calendar-file date format downstream can carry.
    pub const MAX_YEAR: Year = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date { year, month, day })
    }

    /// Create a date from a year and a 1-based day-of-year ordinal.
    ///
    /// Inverse of [`Date::day_of_year`]: month lengths are peeled off the
    /// ordinal until the remainder falls inside a month.
    pub fn from_year_ordinal(year: Year, ordinal: u16) -> Result<Self> {
        let total = days_in_year(year);
        if ordinal == 0 || ordinal > total {
            return Err(Error::Date(format!(
                "day-of-year {ordinal} out of range [1, {total}] for year {year}"
            )));
        }
        let mut month = 1u8;
        let mut remaining = ordinal;
        while remaining > u16::from(days_in_month(year, month)) {
            remaining -= u16::from(days_in_month(year, month));
            month += 1;
        }
        Date::from_ymd(year, month, remaining as u8)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let mut doy = u16::from(self.day);
        for mon in 1..self.month {
            doy += u16::from(days_in_month(self.year, mon));
        }
        doy
    }

    /// Return the weekday.
    ///
    /// Gregorian congruence over a per-month offset table; January and
    /// February count as months of the previous year, hence the year
    /// shift when `month < 3`.
    pub fn weekday(&self) -> Weekday {
        let y = if self.month < 3 {
            u32::from(self.year) - 1
        } else {
            u32::from(self.year)
        };
        let index = (y + y / 4 - y / 100 + y / 400
            + u32::from(WEEKDAY_OFFSETS[self.month as usize - 1])
            + u32::from(self.day))
            % 7;
        Weekday::from_index(index as u8).expect("index mod 7 always in 0..=6")
    }

    // ── Stepping ──────────────────────────────────────────────────────────────

    /// Return the next calendar day, rolling over month and year ends.
    pub fn next_day(self) -> Result<Self> {
        if self.day < days_in_month(self.year, self.month) {
            return Ok(Date {
                day: self.day + 1,
                ..self
            });
        }
        if self.month < 12 {
            return Ok(Date {
                year: self.year,
                month: self.month + 1,
                day: 1,
            });
        }
        if self.year == Self::MAX_YEAR {
            return Err(Error::Date(format!("no day after {self}")));
        }
        Ok(Date {
            year: self.year + 1,
            month: 1,
            day: 1,
        })
    }

    /// Return the previous calendar day, rolling back over month and
    /// year starts.
    pub fn previous_day(self) -> Result<Self> {
        if self.day > 1 {
            return Ok(Date {
                day: self.day - 1,
                ..self
            });
        }
        if self.month > 1 {
            let month = self.month - 1;
            return Ok(Date {
                year: self.year,
                month,
                day: days_in_month(self.year, month),
            });
        }
        if self.year == Self::MIN_YEAR {
            return Err(Error::Date(format!("no day before {self}")));
        }
        Ok(Date {
            year: self.year - 1,
            month: 12,
            day: 31,
        })
    }

    // ── Weekday-of-month rules ────────────────────────────────────────────────

    /// Return the *n*-th occurrence of `weekday` in the given month.
    ///
    /// For example, `nth_weekday(3, Weekday::Monday, 2024, 1)` returns the
    /// third Monday of January 2024 (2024-01-15).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or the month has no *n*-th such
    /// weekday, or if the year/month are out of range.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        // Days to advance from the 1st to the first occurrence
        let first = Date::from_ymd(year, month, 1)?;
        let skip =
            (i16::from(weekday.index()) - i16::from(first.weekday().index())).rem_euclid(7) as u16;
        let day = 1 + skip + 7 * u16::from(n - 1);
        if day > u16::from(days_in_month(year, month)) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }

    /// Return the last occurrence of `weekday` in the given month.
    ///
    /// The fourth occurrence always exists; a fifth exists exactly when
    /// the fourth sits at least seven days before the end of the month.
    pub fn last_weekday(weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        let fourth = Date::nth_weekday(4, weekday, year, month)?;
        if fourth.day <= days_in_month(year, month) - 7 {
            Date::from_ymd(year, month, fourth.day + 7)
        } else {
            Ok(fourth)
        }
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let month = Month::from_number(self.month).expect("stored month always valid");
        write!(f, "{} {} {}", self.day, month.long_name(), self.year)
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({:04}-{:02}-{:02})", self.year, self.month, self.day)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
