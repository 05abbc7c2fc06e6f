use serde::{Deserialize, Serialize};

// =========================================================
// Category ranking types (shared by season and weather views)
// =========================================================

/// One category with its distinct-day rental count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRanking {
    /// Decoded display label
    pub category: String,
    /// Number of distinct rental days in this category
    pub unique_days: usize,
}

/// Ranked categories plus the two bar-chart panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingData {
    /// Full ranking, most rental days first
    pub ranking: Vec<CategoryRanking>,
    /// Up to five categories with the most rental days
    pub top: Vec<CategoryRanking>,
    /// Up to five categories with the fewest rental days, ascending
    pub bottom: Vec<CategoryRanking>,
}
