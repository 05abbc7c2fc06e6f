//! In-memory rental dataset and date-window slicing.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use log::info;

use super::checksum::calculate_checksum;
use super::error::DataError;
use super::loader::parse_rental_csv;
use crate::api::DatasetInfo;
use crate::models::{DateRange, RentalRecord};

/// The source dataset, loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<RentalRecord>,
    checksum: Option<String>,
}

impl Dataset {
    /// Load the dataset from a CSV file.
    ///
    /// Fails when the file is missing or unreadable, when any record is
    /// malformed, or when the file holds no records at all. All of these
    /// are startup-fatal for the server.
    pub fn from_csv_path(path: &Path) -> Result<Self, DataError> {
        let contents = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records = parse_rental_csv(&contents)?;
        if records.is_empty() {
            return Err(DataError::Empty);
        }
        let checksum = calculate_checksum(contents.as_bytes());
        info!(
            "dataset ready: {} records from {} (sha256 {})",
            records.len(),
            path.display(),
            &checksum[..12]
        );

        Ok(Self {
            records,
            checksum: Some(checksum),
        })
    }

    /// Build a dataset from records already in memory.
    ///
    /// Used by tests and embedders; no checksum is attached.
    pub fn from_records(records: Vec<RentalRecord>) -> Self {
        Self {
            records,
            checksum: None,
        }
    }

    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// SHA-256 checksum of the source file, when loaded from disk.
    pub fn checksum(&self) -> Option<&str> {
        self.checksum.as_deref()
    }

    /// Earliest and latest `dteday` present in the dataset.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.dteday).min()?;
        let max = self.records.iter().map(|r| r.dteday).max()?;
        Some((min, max))
    }

    /// Resolve a user-selected window against the dataset bounds.
    ///
    /// Missing endpoints default to the dataset bounds. A window whose
    /// start is after its end is rejected; endpoints falling outside the
    /// bounds are clamped back in.
    pub fn resolve_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<DateRange, DataError> {
        let (min, max) = self.date_bounds().ok_or(DataError::Empty)?;

        let requested_start = start.unwrap_or(min);
        let requested_end = end.unwrap_or(max);
        if requested_start > requested_end {
            return Err(DataError::InvalidRange {
                start: requested_start,
                end: requested_end,
            });
        }

        Ok(DateRange::new(
            requested_start.clamp(min, max),
            requested_end.clamp(min, max),
        ))
    }

    /// Records whose `dteday` falls inside the inclusive window.
    pub fn slice(&self, range: DateRange) -> Vec<RentalRecord> {
        self.records
            .iter()
            .filter(|r| range.contains(r.dteday))
            .cloned()
            .collect()
    }

    /// Summary of the loaded dataset for the landing endpoint.
    pub fn info(&self) -> Result<DatasetInfo, DataError> {
        let (start_date, end_date) = self.date_bounds().ok_or(DataError::Empty)?;
        Ok(DatasetInfo {
            row_count: self.records.len(),
            start_date,
            end_date,
            checksum: self.checksum.clone(),
        })
    }
}
