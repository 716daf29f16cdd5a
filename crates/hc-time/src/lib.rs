//! # hc-time
//!
//! Proleptic-Gregorian date arithmetic: the `Date` type, the `Month` and
//! `Weekday` enums, and the closed-form Easter computation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type and month-length helpers.
pub mod date;

/// Date of Easter Sunday.
pub mod easter;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, days_in_year, is_leap_year, Date};
pub use easter::{easter, easter_day_of_year, EASTER_MAX_YEAR, EASTER_MIN_YEAR};
pub use month::Month;
pub use weekday::Weekday;
