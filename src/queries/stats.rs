//! Pure aggregations over a slice of result records.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::dates::parse_date;
use crate::models::{BetType, DailyStat, ResultRecord, Summary, TypeStats};

/// Round half up, matching how the dashboard has always displayed rates.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Percentage of `invest` returned, rounded. Zero when nothing was invested.
pub fn recovery_rate(invest: f64, return_val: f64) -> i64 {
    if invest == 0.0 || !invest.is_finite() || !return_val.is_finite() {
        return 0;
    }
    round_half_up(return_val / invest * 100.0)
}

/// Percentage of records with a positive return, rounded. Zero when empty.
pub fn hit_rate(records: &[ResultRecord]) -> i64 {
    if records.is_empty() {
        return 0;
    }
    let hits = records.iter().filter(|r| r.return_val > 0.0).count();
    round_half_up(hits as f64 / records.len() as f64 * 100.0)
}

/// Records dated within `[today - (days - 1), today]`, newest first.
///
/// Records with unparseable dates are excluded. The result is ordered by the
/// raw date string, descending.
pub fn recent_window(records: &[ResultRecord], days: u32, today: NaiveDate) -> Vec<ResultRecord> {
    if days == 0 {
        return Vec::new();
    }
    let from = today
        .checked_sub_signed(Duration::days(i64::from(days) - 1))
        .unwrap_or(NaiveDate::MIN);
    let mut out: Vec<ResultRecord> = records
        .iter()
        .filter(|r| {
            parse_date(&r.date)
                .map(|d| d >= from && d <= today)
                .unwrap_or(false)
        })
        .cloned()
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// Records dated in the given calendar month (`month` is 1-12).
pub fn by_month(records: &[ResultRecord], year: i32, month: u32) -> Vec<ResultRecord> {
    records
        .iter()
        .filter(|r| {
            parse_date(&r.date)
                .map(|d| d.year() == year && d.month() == month)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Group records by date, summing invest, return and user count.
///
/// Ordered by date ascending.
pub fn daily_rollup(records: &[ResultRecord]) -> Vec<DailyStat> {
    let mut by_date: HashMap<&str, DailyStat> = HashMap::new();
    for r in records {
        let stat = by_date.entry(r.date.as_str()).or_insert_with(|| DailyStat {
            date: r.date.clone(),
            invest: 0.0,
            return_val: 0.0,
            user_count: 0.0,
        });
        stat.invest += r.invest;
        stat.return_val += r.return_val;
        stat.user_count += r.user_count.unwrap_or(0.0);
    }

    let mut stats: Vec<DailyStat> = by_date.into_values().collect();
    stats.sort_by(|a, b| {
        (parse_date(&a.date), &a.date).cmp(&(parse_date(&b.date), &b.date))
    });
    stats
}

/// Recovery rate of free and paid tickets, each over its own totals.
pub fn type_stats(records: &[ResultRecord]) -> TypeStats {
    let (mut free_in, mut free_out) = (0.0, 0.0);
    let (mut paid_in, mut paid_out) = (0.0, 0.0);
    for r in records {
        match r.type_field {
            BetType::Free => {
                free_in += r.invest;
                free_out += r.return_val;
            }
            BetType::Paid => {
                paid_in += r.invest;
                paid_out += r.return_val;
            }
            _ => {}
        }
    }
    TypeStats {
        free: recovery_rate(free_in, free_out),
        paid: recovery_rate(paid_in, paid_out),
    }
}

/// Overall totals, recovery rate and hit rate.
pub fn totals(records: &[ResultRecord]) -> Summary {
    let invest: f64 = records.iter().map(|r| r.invest).sum();
    let return_val: f64 = records.iter().map(|r| r.return_val).sum();
    let user_count: f64 = records.iter().filter_map(|r| r.user_count).sum();
    Summary {
        record_count: records.len(),
        invest,
        return_val,
        user_count,
        recovery_rate: recovery_rate(invest, return_val),
        hit_rate: hit_rate(records),
    }
}
