// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Monitor Registry
//!
//! Thread-safe collection of [`Monitor`]s keyed by name.
//!
//! # Design
//!
//! - One `parking_lot::Mutex` guards the map structure only
//! - Monitor callbacks always run with the lock released, so a slow or
//!   reentrant callback never blocks other requests
//! - Registering an existing name replaces the previous monitor
//! - There is no unregister; the map only grows or is overwritten
//!
//! Because callbacks run unlocked, two concurrent toggles of the same name
//! are not serialized here. Monitors that need that must serialize
//! themselves.

use crate::monitor::Monitor;
use crate::protocol::MonitorStates;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Registry of the monitors exposed by this process.
///
/// Create one per process and share it through an `Arc` with the handler and
/// with the code that registers monitors.
pub struct Registry {
    monitors: Mutex<HashMap<String, Arc<dyn Monitor>>>,
}

impl Registry {
    /// Create new empty registry
    pub fn new() -> Self {
        Self {
            monitors: Mutex::new(HashMap::new()),
        }
    }

    /// Register a monitor under its own name, replacing any previous entry.
    pub fn register(&self, monitor: Arc<dyn Monitor>) {
        let name = monitor.name().to_string();
        let replaced = self.monitors.lock().insert(name.clone(), monitor).is_some();

        if replaced {
            tracing::warn!(monitor = %name, "monitor re-registered, previous entry replaced");
        } else {
            tracing::debug!(monitor = %name, "monitor registered");
        }
    }

    /// Find the monitor registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Monitor>> {
        self.monitors.lock().get(name).cloned()
    }

    /// Query every monitor for its current state.
    ///
    /// Entries are cloned under the lock; the queries run after it is
    /// released.
    pub fn snapshot(&self) -> MonitorStates {
        let entries: Vec<(String, Arc<dyn Monitor>)> = self
            .monitors
            .lock()
            .iter()
            .map(|(name, monitor)| (name.clone(), Arc::clone(monitor)))
            .collect();

        entries
            .into_iter()
            .map(|(name, monitor)| {
                let enabled = monitor.enabled();
                (name, enabled)
            })
            .collect()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.monitors.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.monitors.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.lock().is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("monitors", &self.names())
            .finish()
    }
}
