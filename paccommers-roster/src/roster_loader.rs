//! CSV roster loader.
//!
//! Parses roster CSV files into independent `MembershipRecord`s, each with the
//! basket that user is checking out.
//! Expected CSV columns:
//!   username, monthly_expense, monthly_income[, items]
//! where `items` is a `;`-separated list of prices. The column may be left
//! out of the header, left empty, or cut off at the end of a short row; all
//! three mean an empty basket.

use paccommers_tier::MembershipRecord;
use serde::Deserialize;
use std::io::Read;

use crate::error::{RosterError, RosterResult};

/// One CSV row as it appears on disk.
#[derive(Debug, Clone, Deserialize)]
struct RosterRow {
    username: String,
    monthly_expense: f64,
    monthly_income: f64,
    #[serde(default, deserialize_with = "deserialize_items")]
    items: Vec<f64>,
}

/// A roster user together with their basket.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub record: MembershipRecord,
    pub items: Vec<f64>,
}

impl From<RosterRow> for RosterEntry {
    fn from(row: RosterRow) -> Self {
        Self {
            record: MembershipRecord::new(row.username, row.monthly_expense, row.monthly_income),
            items: row.items,
        }
    }
}

/// Load roster entries from a CSV reader.
pub fn load_roster<R: Read>(reader: R) -> RosterResult<Vec<RosterEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();
    for (index, result) in csv_reader.deserialize().enumerate() {
        let row: RosterRow = result.map_err(|source| RosterError::Parse {
            line: error_line(&source, index),
            source,
        })?;
        log::debug!(
            "roster record {}: {} ({} items)",
            index + 1,
            row.username,
            row.items.len()
        );
        entries.push(RosterEntry::from(row));
    }

    log::info!("loaded {} roster entries", entries.len());
    Ok(entries)
}

/// Load roster entries from a CSV file path.
pub fn load_roster_file(path: &str) -> RosterResult<Vec<RosterEntry>> {
    let file = std::fs::File::open(path).map_err(|source| RosterError::Open {
        path: path.to_string(),
        source,
    })?;
    load_roster(file)
}

/// File line of a failed record, as tracked by the csv reader.
///
/// Falls back to counting records (header on line 1) when the error carries
/// no position.
fn error_line(err: &csv::Error, index: usize) -> usize {
    err.position()
        .map(|p| p.line() as usize)
        .unwrap_or(index + 2)
}

/// Parse a `;`-separated price list. A missing or empty field is an empty
/// basket.
fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    s.split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            p.parse::<f64>().map_err(|_| {
                <D::Error as serde::de::Error>::custom(format!("expected item price, got '{}'", p))
            })
        })
        .collect()
}
