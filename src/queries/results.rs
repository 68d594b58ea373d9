//! Record queries over the in-memory [`RecordStore`](crate::store::RecordStore).

use chrono::NaiveDate;

use crate::dates;
use crate::error::{BoatRaceError, Result};
use crate::models::{DailyStat, ResultRecord, Summary, TypeStats};
use crate::queries::stats;
use crate::store::RecordStore;

// ---------------------------------------------------------------------------
// ResultQuery
// ---------------------------------------------------------------------------

/// Query interface over the store's current collection.
pub struct ResultQuery<'a> {
    store: &'a RecordStore,
}

impl<'a> ResultQuery<'a> {
    /// Create a new `ResultQuery` bound to the given store.
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// All records, newest first.
    pub fn all(&self) -> &'a [ResultRecord] {
        self.store.all()
    }

    /// Look up one record by id.
    pub fn get(&self, id: &str) -> Option<&'a ResultRecord> {
        self.store.get(id)
    }

    /// Records from the last `days` days, today included.
    pub fn recent(&self, days: u32) -> Vec<ResultRecord> {
        self.recent_at(days, dates::today())
    }

    /// Same as [`recent`](Self::recent) with an explicit "today".
    pub fn recent_at(&self, days: u32, today: NaiveDate) -> Vec<ResultRecord> {
        stats::recent_window(self.store.all(), days, today)
    }

    /// Records in a calendar month.
    ///
    /// Returns `InvalidArgument` unless `month` is in 1-12.
    pub fn by_month(&self, year: i32, month: u32) -> Result<Vec<ResultRecord>> {
        if !(1..=12).contains(&month) {
            return Err(BoatRaceError::InvalidArgument(format!(
                "month must be 1-12, got {}",
                month
            )));
        }
        Ok(stats::by_month(self.store.all(), year, month))
    }

    /// Daily rollup of the whole collection.
    pub fn daily(&self) -> Vec<DailyStat> {
        stats::daily_rollup(self.store.all())
    }

    /// Free/paid recovery rates of the whole collection.
    pub fn type_stats(&self) -> TypeStats {
        stats::type_stats(self.store.all())
    }

    pub fn hit_rate(&self) -> i64 {
        stats::hit_rate(self.store.all())
    }

    pub fn summary(&self) -> Summary {
        stats::totals(self.store.all())
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }
}
