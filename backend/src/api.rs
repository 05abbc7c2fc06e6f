//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::landing::DatasetInfo;
pub use crate::routes::monthly::MonthlyData;
pub use crate::routes::monthly::MonthlyMetrics;
pub use crate::routes::monthly::MonthlySummaryRow;
pub use crate::routes::rankings::CategoryRanking;
pub use crate::routes::rankings::RankingData;

pub use crate::models::DateRange;
