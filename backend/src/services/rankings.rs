//! Season and weather-condition rankings.
//!
//! Both rankings share one algorithm: decode the raw category value into a
//! display label, count distinct rental days per label, and sort the groups
//! by that count descending.

use std::collections::{HashMap, HashSet};

use crate::api::{CategoryRanking, RankingData};
use crate::models::RentalRecord;

/// Number of entries shown in each bar-chart panel.
const PANEL_SIZE: usize = 5;

/// Decode a raw season value into its display label.
///
/// Integer codes map through the fixed table below; any other value is
/// assumed to be decoded already and passes through unchanged, so running
/// the decode twice is a no-op. Codes outside 1-3 fall through to
/// "Winter".
// TODO: confirm the "Springer" label for code 1 with the data owner; it is
// kept as-is so the backend matches the dashboard output users already see.
pub fn decode_season(raw: &str) -> String {
    match raw.trim().parse::<i64>() {
        Ok(1) => "Springer".to_string(),
        Ok(2) => "Summer".to_string(),
        Ok(3) => "Fall".to_string(),
        Ok(_) => "Winter".to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Decode a raw weather-condition value into its display label.
///
/// Codes outside 1-3 fall through to the severe-weather label.
pub fn decode_weathersit(raw: &str) -> String {
    match raw.trim().parse::<i64>() {
        Ok(1) => "Clear, Few Clouds, Partly Cloudy, Partly Cloudy".to_string(),
        Ok(2) => "Mist + Cloudy, Mist + Broken Clouds, Mist + Few Clouds, Mist".to_string(),
        Ok(3) => {
            "Light Snow, Light Rain + Thunderstorm + Scattered Clouds, Light Rain + Scattered Clouds"
                .to_string()
        }
        Ok(_) => "Heavy Rain + Ice Pallets + Thunderstorm + Mist, Snow + Fog".to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Group rows by decoded category and count distinct day ids per group.
///
/// Distinct `instant` counting guards against duplicated rows inflating a
/// category. The sort is stable, so tied categories keep their
/// first-encountered order. Categories with no rows in the input are
/// absent from the output, not zero-filled.
pub(crate) fn compute_category_ranking<'a, I>(
    rows: I,
    decode: fn(&str) -> String,
) -> Vec<CategoryRanking>
where
    I: IntoIterator<Item = (i64, &'a str)>,
{
    let mut encounter_order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, HashSet<i64>> = HashMap::new();

    for (instant, raw) in rows {
        let label = decode(raw);
        groups
            .entry(label.clone())
            .or_insert_with(|| {
                encounter_order.push(label.clone());
                HashSet::new()
            })
            .insert(instant);
    }

    let mut ranking: Vec<CategoryRanking> = encounter_order
        .into_iter()
        .map(|category| {
            let unique_days = groups.get(&category).map_or(0, HashSet::len);
            CategoryRanking {
                category,
                unique_days,
            }
        })
        .collect();

    ranking.sort_by(|a, b| b.unique_days.cmp(&a.unique_days));
    ranking
}

/// Rank seasons by the number of distinct rental days.
pub fn compute_season_ranking(records: &[RentalRecord]) -> Vec<CategoryRanking> {
    compute_category_ranking(
        records.iter().map(|r| (r.instant, r.season.as_str())),
        decode_season,
    )
}

/// Rank weather conditions by the number of distinct rental days.
pub fn compute_weathersit_ranking(records: &[RentalRecord]) -> Vec<CategoryRanking> {
    compute_category_ranking(
        records.iter().map(|r| (r.instant, r.weathersit.as_str())),
        decode_weathersit,
    )
}

/// Build ranking data with the top and bottom chart panels.
///
/// The bottom panel re-sorts ascending (stable) before taking its slice,
/// matching how the dashboard renders the "fewest rentals" chart.
pub(crate) fn compute_ranking_data(ranking: Vec<CategoryRanking>) -> RankingData {
    let top: Vec<CategoryRanking> = ranking.iter().take(PANEL_SIZE).cloned().collect();

    let mut bottom = ranking.clone();
    bottom.sort_by(|a, b| a.unique_days.cmp(&b.unique_days));
    bottom.truncate(PANEL_SIZE);

    RankingData {
        ranking,
        top,
        bottom,
    }
}

/// Season ranking plus its chart panels.
pub fn compute_season_data(records: &[RentalRecord]) -> RankingData {
    compute_ranking_data(compute_season_ranking(records))
}

/// Weather-condition ranking plus its chart panels.
pub fn compute_weathersit_data(records: &[RentalRecord]) -> RankingData {
    compute_ranking_data(compute_weathersit_ranking(records))
}
