// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Client and server configuration.
//!
//! Both can be built programmatically or loaded from TOML:
//!
//! ```toml
//! # client side (ghost CLI)
//! remote = "http://127.0.0.1:8080/monitors"
//! timeout_secs = 5
//! ```
//!
//! ```toml
//! # server side (embedding process)
//! bind = "0.0.0.0"
//! port = 8080
//! path = "/monitors"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Where a [`GhostClient`](crate::GhostClient) sends its requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Full URL of the remote monitor endpoint.
    #[serde(default)]
    pub remote: Option<String>,

    /// Overall request timeout. Unset keeps the HTTP transport's default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(remote) = &self.remote {
            if remote.trim().is_empty() {
                return Err(ConfigError::Invalid("remote must not be empty".into()));
            }
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than 0 (omit it to disable)".into(),
            ));
        }
        Ok(())
    }
}

/// Where [`serve`](crate::serve) listens and mounts the handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeConfig {
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Endpoint path, e.g. `/monitors`.
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_path() -> String {
    "/monitors".to_string()
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            path: default_path(),
        }
    }
}

impl ServeConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// `bind:port`, as handed to the listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// URL a client on this host would use to reach the handler.
    pub fn local_url(&self) -> String {
        let host: &str = if self.bind == "0.0.0.0" {
            "127.0.0.1"
        } else {
            &self.bind
        };
        format!("http://{}:{}{}", host, self.port, self.path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind.is_empty() {
            return Err(ConfigError::Invalid("bind address must not be empty".into()));
        }
        if !self.path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "path '{}' must start with '/'",
                self.path
            )));
        }
        Ok(())
    }
}
