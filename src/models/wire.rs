use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::record::ResultRecord;

// ---------------------------------------------------------------------------
// Action / Kind — Write discriminators
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        })
    }
}

/// Dataset a write targets; both share the one endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[default]
    Records,
    Users,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Records => "records",
            Kind::Users => "users",
        })
    }
}

// ---------------------------------------------------------------------------
// ReadPayload — Body of a read, once unwrapped from its callback
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadPayload {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub items: Value,
}

impl ReadPayload {
    /// Decode the items into records.
    ///
    /// Returns an empty list when `ok` is false or `items` is not an array.
    /// Items that fail to decode are skipped; the second element counts them.
    pub fn into_records(self) -> (Vec<ResultRecord>, usize) {
        if !self.ok {
            return (Vec::new(), 0);
        }
        let Value::Array(items) = self.items else {
            return (Vec::new(), 0);
        };
        let mut skipped = 0;
        let records = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<ResultRecord>(item) {
                Ok(r) => Some(r),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping undecodable result item");
                    skipped += 1;
                    None
                }
            })
            .collect();
        (records, skipped)
    }
}

// ---------------------------------------------------------------------------
// WriteRequest — POST body
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteRequest {
    pub token: String,
    pub action: Action,
    pub kind: Kind,
    pub data: Value,
}

impl WriteRequest {
    pub fn new(token: impl Into<String>, action: Action, kind: Kind, data: Value) -> Self {
        Self {
            token: token.into(),
            action,
            kind,
            data,
        }
    }
}
