//! Aggregation tests: recovery rate, hit rate, windows, rollups.

mod common;

use boatrace_sdk::models::BetType;
use boatrace_sdk::queries::stats::{
    by_month, daily_rollup, hit_rate, recent_window, recovery_rate, totals, type_stats,
};
use chrono::NaiveDate;
use common::record;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// recovery_rate
// ---------------------------------------------------------------------------

#[test]
fn recovery_rate_is_zero_without_investment() {
    for ret in [0.0, 1.0, 50.0, 123_456.0, -10.0] {
        assert_eq!(recovery_rate(0.0, ret), 0);
    }
}

#[test]
fn recovery_rate_is_rounded_percentage() {
    assert_eq!(recovery_rate(100.0, 50.0), 50);
    assert_eq!(recovery_rate(300.0, 1000.0), 333);
    assert_eq!(recovery_rate(200.0, 1.0), 1); // 0.5 rounds up
    assert_eq!(recovery_rate(3.0, 2.0), 67);
}

#[test]
fn recovery_rate_ignores_non_finite_input() {
    assert_eq!(recovery_rate(f64::NAN, 100.0), 0);
    assert_eq!(recovery_rate(100.0, f64::INFINITY), 0);
}

// ---------------------------------------------------------------------------
// hit_rate
// ---------------------------------------------------------------------------

#[test]
fn hit_rate_counts_positive_returns() {
    let records = vec![
        record("a", "2024-01-01", 100.0, 10.0, BetType::Free),
        record("b", "2024-01-01", 100.0, 0.0, BetType::Free),
    ];
    assert_eq!(hit_rate(&records), 50);
}

#[test]
fn hit_rate_of_empty_is_zero() {
    assert_eq!(hit_rate(&[]), 0);
}

#[test]
fn hit_rate_rounds() {
    let records = vec![
        record("a", "2024-01-01", 100.0, 10.0, BetType::Free),
        record("b", "2024-01-02", 100.0, 0.0, BetType::Free),
        record("c", "2024-01-03", 100.0, 0.0, BetType::Free),
    ];
    assert_eq!(hit_rate(&records), 33);
}

// ---------------------------------------------------------------------------
// recent_window
// ---------------------------------------------------------------------------

#[test]
fn recent_window_edges_are_inclusive() {
    let today = day(2024, 5, 20);
    let records = vec![
        record("edge-in", "2024-05-07", 100.0, 0.0, BetType::Free),
        record("edge-out", "2024-05-06", 100.0, 0.0, BetType::Free),
        record("today", "2024-05-20", 100.0, 0.0, BetType::Free),
        record("future", "2024-05-21", 100.0, 0.0, BetType::Free),
    ];
    let ids: Vec<String> = recent_window(&records, 14, today)
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["today", "edge-in"]);
}

#[test]
fn recent_window_excludes_unparseable_dates() {
    let records = vec![
        record("bad", "soon", 100.0, 0.0, BetType::Free),
        record("empty", "", 100.0, 0.0, BetType::Free),
        record("ok", "2024/05/19", 100.0, 0.0, BetType::Free),
    ];
    let out = recent_window(&records, 7, day(2024, 5, 20));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "ok");
}

#[test]
fn recent_window_sorts_by_date_string_desc() {
    let records = vec![
        record("a", "2024-05-10", 1.0, 0.0, BetType::Free),
        record("b", "2024-05-18", 1.0, 0.0, BetType::Free),
        record("c", "2024-05-12", 1.0, 0.0, BetType::Free),
    ];
    let dates: Vec<String> = recent_window(&records, 30, day(2024, 5, 20))
        .into_iter()
        .map(|r| r.date)
        .collect();
    assert_eq!(dates, vec!["2024-05-18", "2024-05-12", "2024-05-10"]);
}

#[test]
fn recent_window_of_zero_days_is_empty() {
    let records = vec![record("a", "2024-05-20", 1.0, 0.0, BetType::Free)];
    assert!(recent_window(&records, 0, day(2024, 5, 20)).is_empty());
}

#[test]
fn recent_window_of_one_day_is_today_only() {
    let records = vec![
        record("a", "2024-05-20", 1.0, 0.0, BetType::Free),
        record("b", "2024-05-19", 1.0, 0.0, BetType::Free),
    ];
    let out = recent_window(&records, 1, day(2024, 5, 20));
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "a");
}

// ---------------------------------------------------------------------------
// by_month
// ---------------------------------------------------------------------------

#[test]
fn by_month_respects_month_boundaries() {
    let records = common::sample_records();
    let ids: Vec<String> = by_month(&records, 2024, 3).into_iter().map(|r| r.id).collect();
    assert!(ids.contains(&"r-004".to_string()));
    assert!(!ids.contains(&"r-005".to_string()));
    assert_eq!(ids.len(), 4);
}

#[test]
fn by_month_checks_the_year() {
    let records = vec![
        record("a", "2023-03-10", 1.0, 0.0, BetType::Free),
        record("b", "2024-03-10", 1.0, 0.0, BetType::Free),
    ];
    let out = by_month(&records, 2023, 3);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "a");
}

// ---------------------------------------------------------------------------
// daily_rollup
// ---------------------------------------------------------------------------

#[test]
fn daily_rollup_sums_records_sharing_a_date() {
    let records = vec![
        record("a", "2024-01-01", 100.0, 50.0, BetType::Free),
        record("b", "2024-01-01", 200.0, 0.0, BetType::Paid),
    ];
    let stats = daily_rollup(&records);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].date, "2024-01-01");
    assert_eq!(stats[0].invest, 300.0);
    assert_eq!(stats[0].return_val, 50.0);
}

#[test]
fn daily_rollup_is_ordered_ascending_and_sums_users() {
    let stats = daily_rollup(&common::sample_records());
    let dates: Vec<&str> = stats.iter().map(|s| s.date.as_str()).collect();
    // Unparseable dates sort first.
    assert_eq!(
        dates,
        vec!["someday", "2024-03-01", "2024-03-15", "2024-03-31", "2024-04-01"]
    );
    assert_eq!(stats[1].user_count, 12.0);
    assert_eq!(stats[1].invest, 1500.0);
}

#[test]
fn daily_rollup_orders_mixed_formats_by_calendar_day() {
    let records = vec![
        record("a", "2024-1-10", 1.0, 0.0, BetType::Free),
        record("b", "2024/01/02", 1.0, 0.0, BetType::Free),
    ];
    let stats = daily_rollup(&records);
    assert_eq!(stats[0].date, "2024/01/02");
    assert_eq!(stats[1].date, "2024-1-10");
}

// ---------------------------------------------------------------------------
// type_stats / totals
// ---------------------------------------------------------------------------

#[test]
fn type_stats_computes_each_category_separately() {
    let stats = type_stats(&common::sample_records());
    // free: 2500 / 1300, paid: 2800 / 3300
    assert_eq!(stats.free, 192);
    assert_eq!(stats.paid, 85);
}

#[test]
fn type_stats_is_zero_for_missing_category() {
    let records = vec![record("a", "2024-01-01", 100.0, 150.0, BetType::Paid)];
    let stats = type_stats(&records);
    assert_eq!(stats.free, 0);
    assert_eq!(stats.paid, 150);
}

#[test]
fn type_stats_serializes_with_backend_labels() {
    let stats = type_stats(&common::sample_records());
    let v = serde_json::to_value(stats).unwrap();
    assert_eq!(v["無料"], 192);
    assert_eq!(v["有料"], 85);
}

#[test]
fn totals_summarizes_everything() {
    let summary = totals(&common::sample_records());
    assert_eq!(summary.record_count, 6);
    assert_eq!(summary.invest, 4700.0);
    assert_eq!(summary.return_val, 5400.0);
    assert_eq!(summary.user_count, 12.0);
    assert_eq!(summary.recovery_rate, 115);
    assert_eq!(summary.hit_rate, 67);
}

#[test]
fn summary_serializes_camel_case() {
    let v = serde_json::to_value(totals(&common::sample_records())).unwrap();
    assert_eq!(v["recordCount"], 6);
    assert_eq!(v["returnVal"], 5400.0);
    assert_eq!(v["userCount"], 12.0);
    assert_eq!(v["recoveryRate"], 115);
    assert_eq!(v["hitRate"], 67);
    assert!(v.get("return_val").is_none());
}
