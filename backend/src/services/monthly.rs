//! Monthly order-count trend.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::api::{MonthlyData, MonthlyMetrics, MonthlySummaryRow};
use crate::models::RentalRecord;

/// Format used for month labels, e.g. "Jan 2021".
const MONTH_LABEL_FORMAT: &str = "%b %Y";

/// Aggregate daily records into per-month order totals.
///
/// Months are keyed by their first calendar day, so rows come back in
/// chronological order with exactly one row per month present in the
/// input. Days missing inside a month simply contribute nothing to its
/// sum. An empty input produces an empty table.
pub fn compute_monthly_rows(records: &[RentalRecord]) -> Vec<MonthlySummaryRow> {
    let mut totals: BTreeMap<NaiveDate, i64> = BTreeMap::new();

    for record in records {
        // with_day(1) cannot fail for a date that already exists.
        let month_start = record.dteday.with_day(1).unwrap_or(record.dteday);
        *totals.entry(month_start).or_insert(0) += record.cnt;
    }

    totals
        .into_iter()
        .map(|(month_start, order_count)| MonthlySummaryRow {
            month_label: month_start.format(MONTH_LABEL_FORMAT).to_string(),
            order_count,
        })
        .collect()
}

/// Compute the monthly trend together with its overview metrics.
pub fn compute_monthly_data(records: &[RentalRecord]) -> MonthlyData {
    let rows = compute_monthly_rows(records);

    let total_orders: i64 = rows.iter().map(|r| r.order_count).sum();
    let peak_month = rows
        .iter()
        .max_by_key(|r| r.order_count)
        .map(|r| r.month_label.clone());

    let metrics = MonthlyMetrics {
        total_orders,
        month_count: rows.len(),
        peak_month,
    };

    MonthlyData { rows, metrics }
}
