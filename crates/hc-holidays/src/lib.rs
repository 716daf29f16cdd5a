//! # hc-holidays
//!
//! Holiday rules, occurrence records, weekend observance shifts, and the
//! United States holiday table with its per-year driver.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Weekend observance shifts.
pub mod observance;

/// `Occurrence` — one dated holiday instance.
pub mod occurrence;

/// `HolidayRule` — the shapes a holiday definition can take.
pub mod rule;

/// United States holiday table and per-year driver.
pub mod united_states;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use observance::{observed_date, observed_title};
pub use occurrence::Occurrence;
pub use rule::{HolidayRule, Nth};
pub use united_states::{holidays_for_year, holidays_for_years, EASTER_TITLE, US_HOLIDAYS};
