use std::path::PathBuf;

use clap::Parser;

/// US public-holiday calendar generator.
#[derive(Parser)]
#[command(
    name = "holcal",
    version,
    about = "Generate an iCalendar file of US public holidays"
)]
pub struct Cli {
    /// Years to generate, e.g. `holcal 2025 2026`.
    #[arg(required = true, value_name = "YEAR")]
    pub years: Vec<u16>,

    /// Output `.ics` path (default: `HolidayCal_<years>.ics`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// File name used when `--output` is not given.
///
/// One year gives `HolidayCal_2025.ics`; several give
/// `HolidayCal_2025-2027.ics`, naming the first and last year of the
/// list as given.
pub fn default_output(years: &[u16]) -> PathBuf {
    match years {
        [only] => PathBuf::from(format!("HolidayCal_{only}.ics")),
        [first, .., last] => PathBuf::from(format!("HolidayCal_{first}-{last}.ics")),
        [] => PathBuf::from("HolidayCal.ics"),
    }
}
