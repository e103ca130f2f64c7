use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::api::Podium;
use crate::roster::Roster;

pub const HEADERS: [&str; 7] = [
    "event",
    "1st email",
    "1st prize ($)",
    "2nd email",
    "2nd prize ($)",
    "3rd email",
    "3rd prize ($)",
];

/// The three prize amounts, applied identically to every event. Amounts are
/// opaque strings copied verbatim from the command line.
#[derive(Debug, Clone)]
pub struct PrizeSchedule {
    pub first: String,
    pub second: String,
    pub third: String,
}

impl PrizeSchedule {
    fn amounts(&self) -> [&str; 3] {
        [&self.first, &self.second, &self.third]
    }
}

/// Streams winner rows to a CSV file, one row per event, written as soon as
/// the event's podium is known.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl ReportWriter<File> {
    /// Create the report at `path`, overwriting any previous report. A stale
    /// file is removed up front, never appended to.
    pub fn create(path: &Path) -> Result<Self> {
        if path.is_file() {
            fs::remove_file(path).context(format!(
                "While removing stale report file {}",
                path.display()
            ))?;
        }
        let writer = csv::Writer::from_path(path).context(format!(
            "While creating report file {}",
            path.display()
        ))?;
        Self::from_csv_writer(writer)
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn from_writer(writer: W) -> Result<Self> {
        Self::from_csv_writer(csv::Writer::from_writer(writer))
    }

    fn from_csv_writer(mut writer: csv::Writer<W>) -> Result<Self> {
        writer
            .write_record(HEADERS)
            .context("While writing report header")?;
        Ok(Self { writer })
    }

    /// Write one row for an event. A rank with no result, a null WCA ID,
    /// and an ID absent from the roster all come out as an empty contact
    /// cell; the prize amounts are written regardless.
    pub fn write_event(
        &mut self,
        podium: &Podium,
        roster: &Roster,
        prizes: &PrizeSchedule,
    ) -> Result<()> {
        let mut row = Vec::with_capacity(HEADERS.len());
        row.push(podium.event_name.as_str());
        for (rank, amount) in prizes.amounts().into_iter().enumerate() {
            row.push(contact_for(podium, roster, rank));
            row.push(amount);
        }
        self.writer
            .write_record(&row)
            .context("While writing report row")
    }

    /// Flush buffered rows and release the underlying handle.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush().context("While flushing report")
    }
}

fn contact_for<'a>(podium: &'a Podium, roster: &'a Roster, rank: usize) -> &'a str {
    podium
        .wca_ids
        .get(rank)
        .and_then(|id| id.as_deref())
        .and_then(|id| roster.get(id))
        .map(String::as_str)
        .unwrap_or_default()
}
