use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

// ---------------------------------------------------------------------------
// BetType — Ticket category (free tip vs. paid tip)
// ---------------------------------------------------------------------------

/// Category of a result record.
///
/// The sheet stores the Japanese labels `無料` (free) and `有料` (paid);
/// `free`/`paid` are accepted on input as well. Unknown labels are kept
/// verbatim and ignored by type stats.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BetType {
    Free,
    Paid,
    #[default]
    Unknown,
    Other(String),
}

impl BetType {
    pub const FREE_LABEL: &'static str = "無料";
    pub const PAID_LABEL: &'static str = "有料";

    /// Label as stored by the backend.
    pub fn label(&self) -> &str {
        match self {
            BetType::Free => Self::FREE_LABEL,
            BetType::Paid => Self::PAID_LABEL,
            BetType::Unknown => "",
            BetType::Other(s) => s,
        }
    }
}

impl From<String> for BetType {
    fn from(s: String) -> Self {
        let t = s.trim();
        if t.is_empty() {
            BetType::Unknown
        } else if t == Self::FREE_LABEL || t.eq_ignore_ascii_case("free") {
            BetType::Free
        } else if t == Self::PAID_LABEL || t.eq_ignore_ascii_case("paid") {
            BetType::Paid
        } else {
            BetType::Other(s)
        }
    }
}

impl From<&str> for BetType {
    fn from(s: &str) -> Self {
        BetType::from(s.to_string())
    }
}

impl From<BetType> for String {
    fn from(t: BetType) -> Self {
        match t {
            BetType::Other(s) => s,
            other => other.label().to_string(),
        }
    }
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// ResultRecord — One betting result as stored in the sheet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    #[serde(default, deserialize_with = "de_string")]
    pub id: String,
    #[serde(default, deserialize_with = "de_string")]
    pub date: String,
    #[serde(default, deserialize_with = "de_number")]
    pub invest: f64,
    #[serde(default, deserialize_with = "de_number")]
    pub return_val: f64,
    #[serde(rename = "type", default, deserialize_with = "de_bet_type")]
    pub type_field: BetType,
    #[serde(
        default,
        deserialize_with = "de_opt_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_count: Option<f64>,
    #[serde(
        default,
        deserialize_with = "de_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

impl ResultRecord {
    /// Build a record from a payload plus client-assigned identity.
    pub fn from_new(id: String, created_at: String, data: NewResult) -> Self {
        Self {
            id,
            date: data.date,
            invest: data.invest,
            return_val: data.return_val,
            type_field: data.type_field,
            user_count: data.user_count,
            created_at: Some(created_at),
        }
    }
}

// ---------------------------------------------------------------------------
// NewResult — Payload for creating a record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResult {
    pub date: String,
    pub invest: f64,
    pub return_val: f64,
    #[serde(rename = "type")]
    pub type_field: BetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_count: Option<f64>,
}

// ---------------------------------------------------------------------------
// ResultPatch — Partial update; absent fields are left untouched
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invest: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_val: Option<f64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_field: Option<BetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_count: Option<f64>,
}

impl ResultPatch {
    /// Overwrite the fields of `record` that this patch sets.
    pub fn apply_to(&self, record: &mut ResultRecord) {
        if let Some(date) = &self.date {
            record.date = date.clone();
        }
        if let Some(invest) = self.invest {
            record.invest = invest;
        }
        if let Some(return_val) = self.return_val {
            record.return_val = return_val;
        }
        if let Some(t) = &self.type_field {
            record.type_field = t.clone();
        }
        if let Some(count) = self.user_count {
            record.user_count = Some(count);
        }
    }
}

// ---------------------------------------------------------------------------
// Lenient cell decoding
// ---------------------------------------------------------------------------

fn scalar_to_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let t = s.trim().replace(',', "");
            if t.is_empty() {
                None
            } else {
                t.parse().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn scalar_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn de_number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let v = Value::deserialize(d)?;
    Ok(scalar_to_f64(&v).unwrap_or(0.0))
}

fn de_opt_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let v = Value::deserialize(d)?;
    Ok(scalar_to_f64(&v))
}

fn de_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let v = Value::deserialize(d)?;
    Ok(scalar_to_string(&v).unwrap_or_default())
}

fn de_opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let v = Value::deserialize(d)?;
    Ok(scalar_to_string(&v).filter(|s| !s.is_empty()))
}

/// Null, empty or non-scalar cells become [`BetType::Unknown`]; numbers are
/// kept as their text.
fn de_bet_type<'de, D: Deserializer<'de>>(d: D) -> Result<BetType, D::Error> {
    let v = Value::deserialize(d)?;
    Ok(scalar_to_string(&v).map(BetType::from).unwrap_or_default())
}
