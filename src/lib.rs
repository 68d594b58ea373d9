//! Boat race results SDK for Rust.
//!
//! Keeps an in-memory copy of the betting-result records held by a
//! spreadsheet-backed web endpoint, relays create/update/delete intents to it,
//! and computes the dashboard aggregates (recent window, monthly view, daily
//! rollup, recovery rate per ticket type, hit rate).
//!
//! # Quick start
//!
//! ```no_run
//! use boatrace_sdk::BoatRaceSdk;
//!
//! let mut sdk = BoatRaceSdk::builder().write_token("secret").build();
//! sdk.init();
//!
//! let last_two_weeks = sdk.results().recent(14);
//! let rates = sdk.results().type_stats();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod queries;
pub mod remote;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncBoatRaceSdk;
pub use error::{BoatRaceError, Result};
pub use remote::RemoteClient;
pub use store::RecordStore;

use models::{Action, Kind, NewResult, ResultPatch, ResultRecord};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// BoatRaceSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`BoatRaceSdk`] instance.
///
/// Use [`BoatRaceSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](BoatRaceSdkBuilder::build) to create the SDK.
pub struct BoatRaceSdkBuilder {
    endpoint: String,
    offline: bool,
    timeout: Duration,
    write_token: Option<String>,
}

impl Default for BoatRaceSdkBuilder {
    fn default() -> Self {
        Self {
            endpoint: config::DEFAULT_ENDPOINT.to_string(),
            offline: false,
            timeout: config::DEFAULT_TIMEOUT,
            write_token: None,
        }
    }
}

impl BoatRaceSdkBuilder {
    /// Point the SDK at a different endpoint.
    ///
    /// Defaults to [`config::DEFAULT_ENDPOINT`].
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, reads fail (leaving the store empty) and writes are
    /// dropped after the token check. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the shared token required for writes.
    pub fn write_token(mut self, token: impl Into<String>) -> Self {
        self.write_token = Some(token.into());
        self
    }

    /// Build the SDK.
    ///
    /// Nothing is fetched here; call [`BoatRaceSdk::init`] to load the
    /// collection.
    pub fn build(self) -> BoatRaceSdk {
        let mut remote = RemoteClient::new(self.endpoint, self.offline, self.timeout);
        if let Some(token) = self.write_token {
            remote.set_write_token(token);
        }
        BoatRaceSdk {
            remote,
            store: RecordStore::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// BoatRaceSdk
// ---------------------------------------------------------------------------

/// The main entry point for the boat race SDK.
///
/// Owns the [`RemoteClient`] and the [`RecordStore`] it feeds. Remote writes
/// are fire-and-forget: each one is followed by a full refetch, and the
/// store then reflects whatever the server held at that moment.
pub struct BoatRaceSdk {
    remote: RemoteClient,
    store: RecordStore,
}

impl BoatRaceSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> BoatRaceSdkBuilder {
        BoatRaceSdkBuilder::default()
    }

    /// Load the collection from the remote.
    ///
    /// Failures are logged and leave the collection empty.
    pub fn init(&mut self) {
        self.store.initialize(&mut self.remote);
    }

    pub fn set_write_token(&mut self, token: impl Into<String>) {
        self.remote.set_write_token(token);
    }

    // -- Remote writes -----------------------------------------------------

    /// Send a write for any dataset, then refetch.
    ///
    /// Fails with [`BoatRaceError::MissingToken`] if no write token is set.
    pub fn send(&mut self, action: Action, kind: Kind, data: Value) -> Result<()> {
        self.store.apply_remote(&mut self.remote, action, kind, data)
    }

    /// Create a record remotely; the server assigns its id.
    pub fn create_result(&mut self, data: &NewResult) -> Result<()> {
        let data = serde_json::to_value(data)?;
        self.send(Action::Create, Kind::Records, data)
    }

    /// Update a record remotely with the fields set in `patch`.
    pub fn update_result_remote(&mut self, id: &str, patch: &ResultPatch) -> Result<()> {
        let mut data = serde_json::to_value(patch)?;
        if let Value::Object(map) = &mut data {
            map.insert("id".to_string(), Value::String(id.to_string()));
        }
        self.send(Action::Update, Kind::Records, data)
    }

    /// Delete a record remotely.
    pub fn delete_result_remote(&mut self, id: &str) -> Result<()> {
        self.send(Action::Delete, Kind::Records, serde_json::json!({ "id": id }))
    }

    // -- Local mutations ---------------------------------------------------

    /// Append a record locally without persisting it.
    pub fn add_result(&mut self, data: NewResult) -> ResultRecord {
        self.store.add_local(data)
    }

    /// Patch a record locally. Returns whether it existed.
    pub fn update_result(&mut self, id: &str, patch: &ResultPatch) -> bool {
        self.store.update_local(id, patch)
    }

    /// Remove a record locally. Returns whether it existed.
    pub fn delete_result(&mut self, id: &str) -> bool {
        self.store.remove_local(id)
    }

    // -- Query accessors ---------------------------------------------------

    /// Current collection, newest first.
    pub fn all(&self) -> &[ResultRecord] {
        self.store.all()
    }

    /// Access the result query interface.
    pub fn results(&self) -> queries::ResultQuery<'_> {
        queries::ResultQuery::new(&self.store)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn remote(&self) -> &RemoteClient {
        &self.remote
    }

    /// Consume the SDK and release the HTTP client.
    pub fn close(mut self) {
        self.remote.close();
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for BoatRaceSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoatRaceSdk(endpoint={}, records={}, offline={}, token={})",
            self.remote.endpoint,
            self.store.len(),
            self.remote.offline,
            if self.remote.has_write_token() { "set" } else { "unset" }
        )
    }
}
