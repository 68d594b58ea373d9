//! Query modules for the boat race SDK.
//!
//! [`stats`] holds the pure aggregation functions; [`results`] wraps them in a
//! query struct that borrows from a [`RecordStore`](crate::store::RecordStore).

pub mod results;
pub mod stats;

pub use results::ResultQuery;
pub use stats::{by_month, daily_rollup, hit_rate, recent_window, recovery_rate, totals, type_stats};
