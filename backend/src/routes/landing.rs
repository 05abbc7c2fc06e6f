use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Landing types
// =========================================================

/// Summary of the dataset currently served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Number of daily records loaded
    pub row_count: usize,
    /// Earliest rental date in the dataset
    pub start_date: NaiveDate,
    /// Latest rental date in the dataset
    pub end_date: NaiveDate,
    /// SHA-256 of the source CSV, when loaded from disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_info_serialization() {
        let info = DatasetInfo {
            row_count: 731,
            start_date: "2020-01-01".parse().unwrap(),
            end_date: "2021-12-31".parse().unwrap(),
            checksum: None,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["row_count"], 731);
        assert_eq!(json["start_date"], "2020-01-01");
        // Absent checksum is omitted entirely.
        assert!(json.get("checksum").is_none());
    }
}
