//! Error types for the data layer.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading or slicing the rentals dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be deserialized.
    #[error("failed to parse CSV record at line {line}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// A `dteday` value did not parse as a calendar date. Malformed dates
    /// abort the load instead of dropping the row, so aggregates never run
    /// over a silently thinned dataset.
    #[error("invalid date '{value}' at line {line}: expected YYYY-MM-DD")]
    InvalidDate {
        line: u64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The dataset holds no records at all.
    #[error("dataset contains no records")]
    Empty,

    /// A requested date window has its start after its end.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}
