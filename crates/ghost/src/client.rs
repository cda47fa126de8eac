// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Blocking client for a remote monitor endpoint.
//!
//! Every call blocks the current thread until the HTTP exchange completes.
//! Do not call it from inside an async runtime.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::protocol::{Action, MonitorStates, ToggleForm};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;

/// Enable the remote monitor `name` at `url`.
pub fn enable_monitor(url: &str, name: &str) -> Result<(), ClientError> {
    GhostClient::new(url)?.enable_monitor(name)
}

/// Disable the remote monitor `name` at `url`.
pub fn disable_monitor(url: &str, name: &str) -> Result<(), ClientError> {
    GhostClient::new(url)?.disable_monitor(name)
}

/// All monitors registered at `url` and their current states.
pub fn list_monitors(url: &str) -> Result<MonitorStates, ClientError> {
    GhostClient::new(url)?.list_monitors()
}

/// Client bound to one remote monitor endpoint.
#[derive(Debug, Clone)]
pub struct GhostClient {
    url: String,
    http: Client,
}

impl GhostClient {
    /// Client using a default HTTP transport.
    pub fn new(url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_http(url, Client::new())
    }

    /// Client using a caller-provided HTTP transport (timeouts, proxies...).
    pub fn with_http(url: impl Into<String>, http: Client) -> Result<Self, ClientError> {
        let url = url.into();
        reqwest::Url::parse(&url).map_err(|e| ClientError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { url, http })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let url = config.remote.clone().ok_or_else(|| ClientError::InvalidUrl {
            url: String::new(),
            reason: "no remote configured".into(),
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|source| ClientError::Transport {
            operation: "client setup",
            source,
        })?;

        Self::with_http(url, http)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn enable_monitor(&self, name: &str) -> Result<(), ClientError> {
        self.action(Action::Enable, name)
    }

    pub fn disable_monitor(&self, name: &str) -> Result<(), ClientError> {
        self.action(Action::Disable, name)
    }

    /// Fetch the name -> enabled mapping from the remote.
    pub fn list_monitors(&self) -> Result<MonitorStates, ClientError> {
        tracing::debug!(url = %self.url, "listing monitors");

        let resp = self
            .http
            .get(&self.url)
            .send()
            .map_err(|source| ClientError::Transport {
                operation: "monitors",
                source,
            })?;
        let resp = expect_ok(resp)?;

        resp.json::<MonitorStates>().map_err(ClientError::Decode)
    }

    fn action(&self, action: Action, name: &str) -> Result<(), ClientError> {
        tracing::debug!(url = %self.url, monitor = name, %action, "sending toggle");

        let resp = self
            .http
            .post(&self.url)
            .form(&ToggleForm::new(action, name))
            .send()
            .map_err(|source| ClientError::Transport {
                operation: action.as_str(),
                source,
            })?;

        expect_ok(resp).map(|_| ())
    }
}

fn expect_ok(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status != StatusCode::OK {
        return Err(ClientError::UnexpectedStatus(status.as_u16()));
    }
    Ok(resp)
}
