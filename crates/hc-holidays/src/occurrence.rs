//! `Occurrence` — one dated holiday instance.

use hc_core::errors::Result;
use hc_time::Date;

/// One all-day calendar event: a title, a start date, and an exclusive
/// end date exactly one day later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    title: String,
    start: Date,
    end: Date,
}

impl Occurrence {
    /// Create a one-day occurrence starting on `start`.
    ///
    /// The end date is the following calendar day (rolling over month and
    /// year ends), so the event covers the start date from midnight to
    /// midnight.
    pub fn all_day(title: impl Into<String>, start: Date) -> Result<Self> {
        Ok(Occurrence {
            title: title.into(),
            start,
            end: start.next_day()?,
        })
    }

    /// Event title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// First day of the event.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Exclusive end date, always the day after [`Occurrence::start`].
    pub fn end(&self) -> Date {
        self.end
    }
}

impl std::fmt::Display for Occurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}  {}",
            self.start.year(),
            self.start.month(),
            self.start.day_of_month(),
            self.title
        )
    }
}
