//! HTTP adapter for the spreadsheet-backed results endpoint.
//!
//! Reads are GETs carrying a `callback` parameter; the endpoint answers with
//! a script body of the form `callback({...})`, which is unwrapped here.
//! Writes are POSTs whose response is never inspected: the caller refetches
//! afterwards to see what the server actually holds.

use crate::config;
use crate::error::{BoatRaceError, Result};
use crate::models::{Action, Kind, ReadPayload, WriteRequest};
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Relays reads and writes to the remote results endpoint.
pub struct RemoteClient {
    /// Endpoint URL used for both reads and writes.
    pub endpoint: String,
    /// If true, never touch the network.
    pub offline: bool,
    timeout: Duration,
    client: Option<Client>,
    write_token: Option<String>,
}

impl RemoteClient {
    pub fn new(endpoint: impl Into<String>, offline: bool, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            offline,
            timeout,
            client: None,
            write_token: None,
        }
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            let client = Client::builder()
                .timeout(self.timeout)
                .redirect(reqwest::redirect::Policy::limited(config::MAX_REDIRECTS))
                .build()?;
            self.client = Some(client);
        }
        self.client
            .as_ref()
            .ok_or_else(|| BoatRaceError::InvalidArgument("HTTP client unavailable".into()))
    }

    /// Set the shared token sent with every write.
    pub fn set_write_token(&mut self, token: impl Into<String>) {
        self.write_token = Some(token.into());
    }

    pub fn has_write_token(&self) -> bool {
        self.write_token.is_some()
    }

    /// Fetch the full record collection.
    ///
    /// Fails on transport errors, non-2xx statuses and bodies that are not a
    /// callback-wrapped (or bare) JSON object.
    pub fn fetch_all(&mut self) -> Result<ReadPayload> {
        if self.offline {
            return Err(BoatRaceError::Offline("read skipped".into()));
        }
        let callback = callback_name();
        let stamp = chrono::Utc::now().timestamp_millis().to_string();
        let endpoint = self.endpoint.clone();
        debug!(endpoint = %endpoint, callback = %callback, "fetching results");

        let client = self.client()?.clone();
        let body = client
            .get(&endpoint)
            .query(&[("callback", callback.as_str()), ("t", stamp.as_str())])
            .send()?
            .error_for_status()?
            .text()?;
        parse_jsonp(&body, &callback)
    }

    /// Send a write intent.
    ///
    /// Fails only when no write token has been set. Transport failures and
    /// error statuses are logged and otherwise treated like success.
    pub fn send(&mut self, action: Action, kind: Kind, data: Value) -> Result<()> {
        let token = self.write_token.clone().ok_or(BoatRaceError::MissingToken)?;
        let request = WriteRequest::new(token, action, kind, data);
        if self.offline {
            warn!(%action, %kind, "offline mode; write not sent");
            return Ok(());
        }
        let body = serde_json::to_string(&request)?;
        let endpoint = self.endpoint.clone();
        let client = self.client()?.clone();

        match client
            .post(&endpoint)
            .header(CONTENT_TYPE, config::WRITE_CONTENT_TYPE)
            .body(body)
            .send()
        {
            Ok(resp) if resp.status().is_success() => {
                debug!(%action, %kind, status = %resp.status(), "write sent");
            }
            Ok(resp) => {
                warn!(%action, %kind, status = %resp.status(), "write answered with error status");
            }
            Err(e) => {
                warn!(%action, %kind, error = %e, "write failed to send");
            }
        }
        Ok(())
    }

    /// Drop the HTTP client, if open.
    pub fn close(&mut self) {
        self.client = None;
    }
}

/// Generate a fresh callback name for a read.
pub fn callback_name() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(config::CALLBACK_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{}{}", config::CALLBACK_PREFIX, suffix)
}

/// Unwrap a `callback({...})` script body into its payload.
///
/// A bare JSON object is accepted as-is.
pub fn parse_jsonp(body: &str, callback: &str) -> Result<ReadPayload> {
    let trimmed = body.trim();
    if trimmed.starts_with('{') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    let open = format!("{}(", callback);
    let start = trimmed
        .find(&open)
        .map(|i| i + open.len())
        .ok_or_else(|| BoatRaceError::Payload(format!("callback {} not found in body", callback)))?;
    let end = trimmed
        .rfind(')')
        .filter(|&e| e >= start)
        .ok_or_else(|| BoatRaceError::Payload("unterminated callback invocation".into()))?;

    Ok(serde_json::from_str(&trimmed[start..end])?)
}
