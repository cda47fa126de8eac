// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Ghost - runtime monitoring switches over HTTP
//!
//! Lets a running process expose named, toggleable monitors (debug logging,
//! sampling, feature probes) and lets a remote operator list and flip them
//! without restarting the process.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! use ghost::{MonitorFuncs, Registry, ServeConfig};
//!
//! # async fn run() -> std::io::Result<()> {
//! let running = Arc::new(AtomicBool::new(false));
//! let (on, off, state) = (running.clone(), running.clone(), running.clone());
//!
//! let registry = Arc::new(Registry::new());
//! registry.register(Arc::new(MonitorFuncs::new(
//!     "runtime",
//!     move || on.store(true, Ordering::SeqCst),
//!     move || off.store(false, Ordering::SeqCst),
//!     move || state.load(Ordering::SeqCst),
//! )));
//!
//! ghost::serve(&ServeConfig::default(), registry).await
//! # }
//! ```
//!
//! From another process:
//!
//! ```bash
//! ghost -g http://127.0.0.1:8080/monitors targets
//! ghost -g http://127.0.0.1:8080/monitors monitor runtime
//! ```
//!
//! # Wire protocol
//!
//! - `GET` returns a JSON object mapping every monitor name to its state
//! - `POST` with form fields `action` (`enable`/`disable`) and `name` toggles
//!   one monitor (200, 400 on a bad form or action, 404 on an unknown name)
//! - any other method answers 405

pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod monitor;
pub mod protocol;
pub mod registry;
pub mod server;

pub use client::{disable_monitor, enable_monitor, list_monitors, GhostClient};
pub use config::{ClientConfig, ServeConfig};
pub use error::{ClientError, ConfigError, HandlerError};
pub use handler::{monitor_handler, monitor_routes};
pub use monitor::{Monitor, MonitorFuncs};
pub use protocol::{Action, MonitorStates};
pub use registry::Registry;
pub use server::{build_router, serve, serve_with_listener, serve_with_shutdown};
