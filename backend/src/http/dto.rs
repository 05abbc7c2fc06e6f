//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The visualization DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Rankings
    CategoryRanking,
    // Landing
    DatasetInfo,
    DateRange,
    // Monthly
    MonthlyData,
    MonthlyMetrics,
    MonthlySummaryRow,
    RankingData,
};

/// Query parameters selecting the dashboard date window.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RangeQuery {
    /// Start of the window, inclusive; defaults to the earliest date
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// End of the window, inclusive; defaults to the latest date
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Dataset load status
    pub dataset: String,
}

/// Complete dashboard payload for one date-window selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    /// The resolved window the payload was computed over
    pub range: DateRange,
    /// Total orders over the window
    pub total_orders: i64,
    /// Monthly order-count trend
    pub monthly: MonthlyData,
    /// Rental volume ranked by season
    pub seasons: RankingData,
    /// Rental volume ranked by weather condition
    pub weather: RankingData,
}
