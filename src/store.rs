//! In-memory collection of result records.
//!
//! The store is replaced wholesale by every remote fetch; there is no
//! incremental merge. Local mutations never reach the remote. Remote writes
//! go through [`RecordStore::apply_remote`], which always refetches
//! afterwards so the collection ends up mirroring whatever the server held at
//! fetch time (last fetch wins).

use crate::dates::parse_date;
use crate::error::Result;
use crate::models::{Action, Kind, NewResult, ResultPatch, ResultRecord};
use crate::remote::RemoteClient;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::cmp::Ordering;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ResultRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing collection, sorted by date descending.
    pub fn from_records(records: Vec<ResultRecord>) -> Self {
        let mut store = Self { records };
        store.sort();
        store
    }

    /// Replace the collection with the remote one, sorted by date descending.
    ///
    /// Read failures are logged and leave the collection empty.
    pub fn initialize(&mut self, remote: &mut RemoteClient) {
        match remote.fetch_all() {
            Ok(payload) => {
                let (records, skipped) = payload.into_records();
                info!(count = records.len(), skipped, "results loaded");
                self.records = records;
                self.sort();
            }
            Err(e) => {
                error!(error = %e, "failed to load results");
                self.records = Vec::new();
            }
        }
    }

    /// Send a write through `remote`, then refetch.
    ///
    /// Only a missing write token is reported; whether the server accepted
    /// the write shows up in the refetched collection.
    pub fn apply_remote(
        &mut self,
        remote: &mut RemoteClient,
        action: Action,
        kind: Kind,
        data: Value,
    ) -> Result<()> {
        remote.send(action, kind, data)?;
        debug!(%action, %kind, "refetching after write");
        self.initialize(remote);
        Ok(())
    }

    /// Append a record locally with a client-assigned id and timestamp.
    pub fn add_local(&mut self, data: NewResult) -> ResultRecord {
        let now = Utc::now();
        let mut millis = now.timestamp_millis();
        while self.get(&millis.to_string()).is_some() {
            millis += 1;
        }
        let record = ResultRecord::from_new(
            millis.to_string(),
            now.to_rfc3339_opts(SecondsFormat::Millis, true),
            data,
        );
        self.records.push(record.clone());
        self.sort();
        record
    }

    /// Patch a record locally. Returns whether it existed.
    pub fn update_local(&mut self, id: &str, patch: &ResultPatch) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                patch.apply_to(record);
                self.sort();
                true
            }
            None => false,
        }
    }

    /// Remove a record locally. Returns whether it existed.
    pub fn remove_local(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn all(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&ResultRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Date descending; undated records last, ties in insertion order.
    fn sort(&mut self) {
        self.records
            .sort_by(|a, b| match (parse_date(&a.date), parse_date(&b.date)) {
                (Some(da), Some(db)) => db.cmp(&da),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
    }
}
