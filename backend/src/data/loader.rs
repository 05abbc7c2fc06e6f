//! CSV ingestion for the daily rentals dataset.

use chrono::NaiveDate;
use serde::Deserialize;

use super::error::DataError;
use crate::models::RentalRecord;

/// Expected format of the `dteday` column.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw CSV row before date decoding. Columns beyond these five are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    instant: i64,
    dteday: String,
    season: String,
    weathersit: String,
    cnt: i64,
}

/// Parse rental records from CSV content.
///
/// The content must carry a header row with at least `instant`, `dteday`,
/// `season`, `weathersit` and `cnt` columns. A record whose `dteday` does
/// not parse aborts the whole load with the offending line number; rows
/// are never dropped.
pub fn parse_rental_csv(contents: &str) -> Result<Vec<RentalRecord>, DataError> {
    let mut reader = csv::Reader::from_reader(contents.as_bytes());
    let mut records = Vec::new();

    for (idx, row) in reader.deserialize::<RawRecord>().enumerate() {
        // Line 1 is the header row.
        let line = idx as u64 + 2;
        let raw = row.map_err(|source| DataError::Csv { line, source })?;
        let dteday =
            NaiveDate::parse_from_str(&raw.dteday, DATE_FORMAT).map_err(|source| {
                DataError::InvalidDate {
                    line,
                    value: raw.dteday.clone(),
                    source,
                }
            })?;

        records.push(RentalRecord {
            instant: raw.instant,
            dteday,
            season: raw.season,
            weathersit: raw.weathersit,
            cnt: raw.cnt,
        });
    }

    Ok(records)
}
