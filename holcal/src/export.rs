//! iCalendar assembly and output.
//!
//! Occurrences become all-day `VEVENT`s with date-valued `DTSTART` and
//! exclusive `DTEND`.  The whole calendar is assembled in memory and
//! written in one step, so a failed assembly writes nothing.

use std::path::Path;

use anyhow::{Context, Result};
use ics::parameters::Value;
use ics::properties::{DtEnd, DtStart, Summary};
use ics::{escape_text, Event, ICalendar};
use tracing::debug;

use hc_holidays::Occurrence;
use hc_time::Date;

/// PRODID emitted in the calendar header.
const PRODID: &str = "-//holcal//US Holiday Calendar//EN";

/// Compact `YYYYMMDD` form used by date-valued properties.
fn date_value(date: Date) -> String {
    format!(
        "{:04}{:02}{:02}",
        date.year(),
        date.month(),
        date.day_of_month()
    )
}

fn build_event(occurrence: &Occurrence, index: usize) -> Event<'static> {
    let start = date_value(occurrence.start());

    // UID and DTSTAMP derive from the occurrence, not the wall clock, so
    // rebuilding the same years yields a byte-identical file.
    let uid = format!("{start}-{index:04}@holcal");
    let mut event = Event::new(uid, format!("{start}T000000Z"));

    let mut dtstart = DtStart::new(start);
    dtstart.add(Value::new("DATE"));
    event.push(dtstart);

    let mut dtend = DtEnd::new(date_value(occurrence.end()));
    dtend.add(Value::new("DATE"));
    event.push(dtend);

    event.push(Summary::new(escape_text(occurrence.title().to_owned())));
    event
}

/// Assemble the full iCalendar object for a sequence of occurrences.
pub fn build_calendar(occurrences: &[Occurrence]) -> ICalendar<'static> {
    let mut calendar = ICalendar::new("2.0", PRODID);
    for (index, occurrence) in occurrences.iter().enumerate() {
        calendar.add_event(build_event(occurrence, index));
    }
    calendar
}

/// Write the calendar for `occurrences` to `path`.
pub fn write_calendar(occurrences: &[Occurrence], path: &Path) -> Result<()> {
    let calendar = build_calendar(occurrences);
    calendar
        .save_file(path)
        .with_context(|| format!("failed to write calendar to {}", path.display()))?;
    debug!(events = occurrences.len(), "calendar file written");
    Ok(())
}
