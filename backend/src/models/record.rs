//! Core domain types for the rentals dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of rental activity from the source dataset.
///
/// `season` and `weathersit` hold either the raw small-integer codes from
/// the CSV or already-decoded display labels; the ranking services accept
/// both forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRecord {
    /// Unique integer id of the row/day
    pub instant: i64,
    /// Calendar date of the record
    pub dteday: NaiveDate,
    /// Season code (1-4) or decoded label
    pub season: String,
    /// Weather condition code (1-4) or decoded label
    pub weathersit: String,
    /// Total rental count for the day
    pub cnt: i64,
}

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether the given date falls inside the range, endpoints included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
