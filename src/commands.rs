use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::info;

use crate::{
    api::WcaClient,
    report::{PrizeSchedule, ReportWriter},
    roster,
};

/// Tokens accepted anywhere on the command line as a request for help.
const HELP_TOKENS: [&str; 4] = ["help", "--help", "h", "-h"];

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(
    after_help = "Example: podium-cli Competition2023-registration.csv Competition2023 Competition2023-winners.csv 15 10 5"
)]
pub struct Cli {
    /// Registration roster CSV with 'WCA ID' and 'Email' columns
    roster: PathBuf,

    /// WCA competition identifier, e.g. Competition2023
    competition_id: String,

    /// Path the winners report CSV is written to (overwritten if present)
    output: PathBuf,

    /// Prize for 1st place, copied verbatim into the report
    first_prize: String,

    /// Prize for 2nd place
    second_prize: String,

    /// Prize for 3rd place
    third_prize: String,
}

impl Cli {
    pub fn run() -> Result<()> {
        let args: Vec<String> = std::env::args().collect();

        // A help token anywhere in the argument list short-circuits the run
        // before any file or network I/O happens.
        if wants_help(args.iter().skip(1).map(String::as_str)) {
            Cli::command().print_long_help()?;
            return Ok(());
        }

        let cli = match Cli::try_parse_from(&args) {
            Ok(cli) => cli,
            // Usage problems (missing arguments and friends) terminate the
            // run without being treated as a failure.
            Err(err) => {
                err.print()?;
                return Ok(());
            }
        };

        cli.reconcile()
    }

    fn reconcile(&self) -> Result<()> {
        let prizes = PrizeSchedule {
            first: self.first_prize.clone(),
            second: self.second_prize.clone(),
            third: self.third_prize.clone(),
        };

        let roster = roster::load(&self.roster)?;
        info!(entries = roster.len(), "loaded roster");

        let client = WcaClient::new()?;

        println!("Fetching events for {}...", self.competition_id.bold());
        let events = client
            .list_events(&self.competition_id)
            .context("While enumerating competition events")?;

        let mut report = ReportWriter::create(&self.output)?;
        for event_id in &events {
            let podium = client
                .event_podium(&self.competition_id, event_id)
                .context(format!("While fetching podium for event {event_id}"))?;
            report.write_event(&podium, &roster, &prizes)?;
        }
        report.finish()?;

        println!(
            "Wrote {} event row{} to {}",
            events.len(),
            if events.len() == 1 { "" } else { "s" },
            self.output.display().to_string().bold()
        );

        Ok(())
    }
}

fn wants_help<'a, I: IntoIterator<Item = &'a str>>(args: I) -> bool {
    args.into_iter().any(|arg| HELP_TOKENS.contains(&arg))
}
