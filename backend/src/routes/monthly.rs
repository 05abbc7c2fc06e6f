use serde::{Deserialize, Serialize};

// =========================================================
// Monthly trend types
// =========================================================

/// One month of aggregated rental orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummaryRow {
    /// Month label rendered as abbreviated month plus year, e.g. "Jan 2021"
    pub month_label: String,
    /// Sum of daily rental counts over the month
    pub order_count: i64,
}

/// Overview metrics for the monthly trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyMetrics {
    pub total_orders: i64,
    pub month_count: usize,
    /// Label of the month with the highest order count, when any
    pub peak_month: Option<String>,
}

/// Complete monthly trend dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyData {
    pub rows: Vec<MonthlySummaryRow>,
    pub metrics: MonthlyMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_row_clone() {
        let row = MonthlySummaryRow {
            month_label: "Jan 2021".to_string(),
            order_count: 15,
        };
        let cloned = row.clone();
        assert_eq!(cloned, row);
    }

    #[test]
    fn test_monthly_data_serialization() {
        let data = MonthlyData {
            rows: vec![MonthlySummaryRow {
                month_label: "Jan 2021".to_string(),
                order_count: 15,
            }],
            metrics: MonthlyMetrics {
                total_orders: 15,
                month_count: 1,
                peak_month: Some("Jan 2021".to_string()),
            },
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["rows"][0]["month_label"], "Jan 2021");
        assert_eq!(json["metrics"]["total_orders"], 15);
    }
}
