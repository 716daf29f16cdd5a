mod cli;
mod export;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use hc_holidays::holidays_for_years;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    info!(years = ?cli.years, "computing holiday occurrences");
    let occurrences = holidays_for_years(&cli.years)?;
    info!(count = occurrences.len(), "occurrences computed");

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli::default_output(&cli.years));
    export::write_calendar(&occurrences, &output)?;
    info!(path = %output.display(), "calendar written");
    Ok(())
}
