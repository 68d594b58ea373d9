//! Shared test fixtures for the boat race SDK integration tests.
//!
//! Provides `sample_records()`, a small hand-built collection covering both
//! ticket types, a shared date, a miss and an undecodable date, plus
//! `sample_store()` wrapping it in a [`RecordStore`].

#![allow(dead_code)]

use boatrace_sdk::models::{BetType, NewResult, ResultRecord};
use boatrace_sdk::RecordStore;

pub fn record(id: &str, date: &str, invest: f64, return_val: f64, bet: BetType) -> ResultRecord {
    ResultRecord {
        id: id.to_string(),
        date: date.to_string(),
        invest,
        return_val,
        type_field: bet,
        user_count: None,
        created_at: None,
    }
}

pub fn new_result(date: &str, invest: f64, return_val: f64) -> NewResult {
    NewResult {
        date: date.to_string(),
        invest,
        return_val,
        type_field: BetType::Paid,
        user_count: None,
    }
}

pub fn sample_records() -> Vec<ResultRecord> {
    let mut with_users = record("r-001", "2024-03-01", 1000.0, 2500.0, BetType::Free);
    with_users.user_count = Some(12.0);
    vec![
        with_users,
        record("r-002", "2024-03-01", 500.0, 0.0, BetType::Paid),
        record("r-003", "2024-03-15", 2000.0, 1200.0, BetType::Paid),
        record("r-004", "2024-03-31", 300.0, 0.0, BetType::Free),
        record("r-005", "2024-04-01", 800.0, 1600.0, BetType::Paid),
        record("r-006", "someday", 100.0, 100.0, BetType::Other("特別".into())),
    ]
}

pub fn sample_store() -> RecordStore {
    RecordStore::from_records(sample_records())
}
