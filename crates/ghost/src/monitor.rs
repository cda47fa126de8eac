// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Monitor abstraction and the closure-based adapter.

use std::fmt;

/// A resource that can be (un)monitored at runtime.
///
/// Implementations own their state and must be safe to call from any
/// request thread. The registry never caches [`Monitor::enabled`]; it asks
/// on every listing.
///
/// Callbacks run synchronously on the request task. They may call back into
/// the [`Registry`](crate::Registry) since no registry lock is held while they
/// run, but two toggles of the same monitor can run concurrently.
pub trait Monitor: Send + Sync {
    /// Name describing the resource. Must be non-empty and unique.
    fn name(&self) -> &str;

    /// Turn monitoring of the resource on.
    fn enable(&self);

    /// Turn monitoring of the resource off.
    fn disable(&self);

    /// Whether the resource is currently being monitored.
    fn enabled(&self) -> bool;
}

type Callback = Box<dyn Fn() + Send + Sync>;
type Query = Box<dyn Fn() -> bool + Send + Sync>;

/// Ad hoc [`Monitor`] built from three closures.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use ghost::{Monitor, MonitorFuncs};
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let (on, off, state) = (flag.clone(), flag.clone(), flag.clone());
/// let monitor = MonitorFuncs::new(
///     "runtime",
///     move || on.store(true, Ordering::SeqCst),
///     move || off.store(false, Ordering::SeqCst),
///     move || state.load(Ordering::SeqCst),
/// );
///
/// monitor.enable();
/// assert!(monitor.enabled());
/// ```
pub struct MonitorFuncs {
    name: String,
    enable: Callback,
    disable: Callback,
    enabled: Query,
}

impl MonitorFuncs {
    pub fn new<E, D, S>(name: impl Into<String>, enable: E, disable: D, enabled: S) -> Self
    where
        E: Fn() + Send + Sync + 'static,
        D: Fn() + Send + Sync + 'static,
        S: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            enable: Box::new(enable),
            disable: Box::new(disable),
            enabled: Box::new(enabled),
        }
    }
}

impl Monitor for MonitorFuncs {
    fn name(&self) -> &str {
        &self.name
    }

    fn enable(&self) {
        (self.enable)();
    }

    fn disable(&self) {
        (self.disable)();
    }

    fn enabled(&self) -> bool {
        (self.enabled)()
    }
}

impl fmt::Debug for MonitorFuncs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonitorFuncs")
            .field("name", &self.name)
            .field("enabled", &self.enabled())
            .finish_non_exhaustive()
    }
}
