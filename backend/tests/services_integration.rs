//! End-to-end tests of the filter -> aggregate -> rank pipeline.

use bri_rust::data::Dataset;
use bri_rust::models::RentalRecord;
use bri_rust::services;
use chrono::NaiveDate;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn record(instant: i64, dteday: &str, season: &str, weathersit: &str, cnt: i64) -> RentalRecord {
    RentalRecord {
        instant,
        dteday: date(dteday),
        season: season.to_string(),
        weathersit: weathersit.to_string(),
        cnt,
    }
}

/// A small two-season winter/spring dataset spanning three months.
fn sample_dataset() -> Dataset {
    Dataset::from_records(vec![
        record(1, "2021-01-05", "4", "1", 100),
        record(2, "2021-01-20", "4", "2", 50),
        record(3, "2021-02-01", "4", "1", 70),
        record(4, "2021-02-14", "1", "1", 90),
        record(5, "2021-03-03", "1", "3", 20),
        record(6, "2021-03-28", "1", "1", 60),
    ])
}

#[test]
fn test_full_pipeline_over_default_range() {
    let dataset = sample_dataset();
    let range = dataset.resolve_range(None, None).unwrap();
    assert_eq!(range.start, date("2021-01-05"));
    assert_eq!(range.end, date("2021-03-28"));

    let records = dataset.slice(range);
    assert_eq!(records.len(), 6);

    let monthly = services::compute_monthly_data(&records);
    let labels: Vec<&str> = monthly.rows.iter().map(|r| r.month_label.as_str()).collect();
    assert_eq!(labels, vec!["Jan 2021", "Feb 2021", "Mar 2021"]);
    assert_eq!(monthly.metrics.total_orders, 390);

    let seasons = services::compute_season_data(&records);
    assert_eq!(seasons.ranking.len(), 2);
    // Winter and Springer both cover three distinct days; Winter was
    // encountered first and the stable sort keeps it there.
    assert_eq!(seasons.ranking[0].category, "Winter");
    assert_eq!(seasons.ranking[0].unique_days, 3);
    assert_eq!(seasons.ranking[1].category, "Springer");
    assert_eq!(seasons.ranking[1].unique_days, 3);

    let weather = services::compute_weathersit_data(&records);
    assert_eq!(weather.ranking[0].unique_days, 4);
    assert!(weather.ranking[0].category.starts_with("Clear"));
}

#[test]
fn test_conservation_of_total_over_any_window() {
    let dataset = sample_dataset();
    let range = dataset
        .resolve_range(Some(date("2021-01-10")), Some(date("2021-02-28")))
        .unwrap();
    let records = dataset.slice(range);

    let input_total: i64 = records.iter().map(|r| r.cnt).sum();
    let monthly = services::compute_monthly_data(&records);
    let output_total: i64 = monthly.rows.iter().map(|r| r.order_count).sum();

    assert_eq!(input_total, output_total);
    assert_eq!(monthly.metrics.total_orders, input_total);
}

#[test]
fn test_unique_day_totals_match_distinct_instants() {
    let dataset = sample_dataset();
    let range = dataset.resolve_range(None, None).unwrap();
    let records = dataset.slice(range);

    let distinct_instants = records.len();
    let season_sum: usize = services::compute_season_ranking(&records)
        .iter()
        .map(|r| r.unique_days)
        .sum();
    let weather_sum: usize = services::compute_weathersit_ranking(&records)
        .iter()
        .map(|r| r.unique_days)
        .sum();

    assert_eq!(season_sum, distinct_instants);
    assert_eq!(weather_sum, distinct_instants);
}

#[test]
fn test_narrow_window_drops_absent_categories() {
    let dataset = sample_dataset();
    // Only the two January days fall inside this window.
    let range = dataset
        .resolve_range(Some(date("2021-01-01")), Some(date("2021-01-31")))
        .unwrap();
    let records = dataset.slice(range);
    assert_eq!(records.len(), 2);

    let seasons = services::compute_season_ranking(&records);
    assert_eq!(seasons.len(), 1);
    assert_eq!(seasons[0].category, "Winter");
    assert_eq!(seasons[0].unique_days, 2);
}

#[test]
fn test_empty_window_degrades_to_empty_outputs() {
    let dataset = sample_dataset();
    // Valid window that contains none of the sample days.
    let range = dataset
        .resolve_range(Some(date("2021-01-06")), Some(date("2021-01-19")))
        .unwrap();
    let records = dataset.slice(range);
    assert!(records.is_empty());

    let monthly = services::compute_monthly_data(&records);
    assert!(monthly.rows.is_empty());
    assert_eq!(monthly.metrics.total_orders, 0);

    assert!(services::compute_season_data(&records).ranking.is_empty());
    assert!(services::compute_weathersit_data(&records).ranking.is_empty());
}

#[test]
fn test_rankings_accept_predecoded_labels() {
    // Re-running the pipeline over already-decoded labels changes nothing.
    let dataset = sample_dataset();
    let records = dataset.slice(dataset.resolve_range(None, None).unwrap());

    let decoded: Vec<RentalRecord> = records
        .iter()
        .map(|r| RentalRecord {
            season: services::decode_season(&r.season),
            weathersit: services::decode_weathersit(&r.weathersit),
            ..r.clone()
        })
        .collect();

    assert_eq!(
        services::compute_season_ranking(&records),
        services::compute_season_ranking(&decoded)
    );
    assert_eq!(
        services::compute_weathersit_ranking(&records),
        services::compute_weathersit_ranking(&decoded)
    );
}
