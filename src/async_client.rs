//! Async wrapper around [`BoatRaceSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. Every
//! remote write is followed by a full refetch, so writes take two round trips.
//!
//! # Example
//!
//! ```no_run
//! use boatrace_sdk::AsyncBoatRaceSdk;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sdk = AsyncBoatRaceSdk::builder().build().await.unwrap();
//!     sdk.init().await.unwrap();
//!
//!     let rates = sdk.run(|s| Ok(s.results().type_stats())).await.unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config;
use crate::error::{BoatRaceError, Result};
use crate::models::{Action, Kind, NewResult, ResultPatch, ResultRecord};
use crate::BoatRaceSdk;

// ---------------------------------------------------------------------------
// AsyncBoatRaceSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncBoatRaceSdk`] instance.
pub struct AsyncBoatRaceSdkBuilder {
    endpoint: String,
    offline: bool,
    timeout: Duration,
    write_token: Option<String>,
}

impl Default for AsyncBoatRaceSdkBuilder {
    fn default() -> Self {
        Self {
            endpoint: config::DEFAULT_ENDPOINT.to_string(),
            offline: false,
            timeout: config::DEFAULT_TIMEOUT,
            write_token: None,
        }
    }
}

impl AsyncBoatRaceSdkBuilder {
    /// Point the SDK at a different endpoint.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Enable or disable offline mode.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the shared token required for writes.
    pub fn write_token(mut self, token: impl Into<String>) -> Self {
        self.write_token = Some(token.into());
        self
    }

    /// Build the async SDK on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncBoatRaceSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = BoatRaceSdk::builder()
                .endpoint(self.endpoint)
                .offline(self.offline)
                .timeout(self.timeout);
            if let Some(token) = self.write_token {
                builder = builder.write_token(token);
            }
            Ok(AsyncBoatRaceSdk {
                inner: Arc::new(Mutex::new(builder.build())),
            })
        })
        .await
        .map_err(|e| BoatRaceError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncBoatRaceSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`BoatRaceSdk`].
///
/// The underlying SDK sits behind a [`Mutex`], so concurrent calls run one
/// at a time in the order they acquire the lock.
#[derive(Clone)]
pub struct AsyncBoatRaceSdk {
    inner: Arc<Mutex<BoatRaceSdk>>,
}

impl AsyncBoatRaceSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncBoatRaceSdkBuilder {
        AsyncBoatRaceSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives `&mut BoatRaceSdk` and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut BoatRaceSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = sdk
                .lock()
                .map_err(|_| BoatRaceError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| BoatRaceError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Load the collection from the remote.
    pub async fn init(&self) -> Result<()> {
        self.run(|s| {
            s.init();
            Ok(())
        })
        .await
    }

    /// Send a write for any dataset, then refetch.
    pub async fn send(&self, action: Action, kind: Kind, data: serde_json::Value) -> Result<()> {
        self.run(move |s| s.send(action, kind, data)).await
    }

    pub async fn create_result(&self, data: NewResult) -> Result<()> {
        self.run(move |s| s.create_result(&data)).await
    }

    pub async fn update_result_remote(&self, id: &str, patch: ResultPatch) -> Result<()> {
        let id = id.to_string();
        self.run(move |s| s.update_result_remote(&id, &patch)).await
    }

    pub async fn delete_result_remote(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.run(move |s| s.delete_result_remote(&id)).await
    }

    /// Snapshot of the current collection.
    pub async fn all(&self) -> Result<Vec<ResultRecord>> {
        self.run(|s| Ok(s.all().to_vec())).await
    }
}
