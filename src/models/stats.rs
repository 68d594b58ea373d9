use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DailyStat — Per-date rollup of invest / return / user count
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    pub date: String,
    pub invest: f64,
    pub return_val: f64,
    pub user_count: f64,
}

// ---------------------------------------------------------------------------
// TypeStats — Recovery rate per ticket category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeStats {
    #[serde(rename = "無料")]
    pub free: i64,
    #[serde(rename = "有料")]
    pub paid: i64,
}

// ---------------------------------------------------------------------------
// Summary — Totals for a set of records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub record_count: usize,
    pub invest: f64,
    pub return_val: f64,
    pub user_count: f64,
    pub recovery_rate: i64,
    pub hit_rate: i64,
}
