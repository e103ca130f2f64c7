use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

/// Column names the registration export must carry, matched exactly.
const ID_COLUMN: &str = "WCA ID";
const EMAIL_COLUMN: &str = "Email";

/// Mapping from WCA ID to the registrant's contact email, loaded once per
/// run and read-only afterwards.
pub type Roster = HashMap<String, String>;

/// Load the registration roster from a CSV export.
///
/// The file must have a header row containing `WCA ID` and `Email` columns.
/// If the same WCA ID appears more than once the last row wins, silently.
pub fn load(path: &Path) -> Result<Roster> {
    let mut reader = csv::Reader::from_path(path)
        .context(format!("While opening roster file {}", path.display()))?;

    let headers = reader
        .headers()
        .context("While reading roster header row")?;
    let id_index = column_index(headers, ID_COLUMN, path)?;
    let email_index = column_index(headers, EMAIL_COLUMN, path)?;

    let mut roster = Roster::new();
    for record in reader.records() {
        let record = record.context("While reading roster row")?;
        let id = record.get(id_index).unwrap_or_default();
        let email = record.get(email_index).unwrap_or_default();
        roster.insert(id.to_string(), email.to_string());
    }

    Ok(roster)
}

fn column_index(headers: &csv::StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| anyhow!("Roster file {} has no '{name}' column", path.display()))
}
