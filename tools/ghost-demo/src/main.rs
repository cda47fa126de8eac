// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Ghost demo process
//!
//! Registers two monitors and serves them over HTTP:
//!
//! - `runtime`  - closure-based, logs a heartbeat every second while enabled
//! - `sampling` - full `Monitor` type, counts samples while enabled
//!
//! # Usage
//!
//! ```bash
//! ghost-demo --port 8080 --path /monitors
//!
//! # from another terminal
//! ghost -g http://127.0.0.1:8080/monitors targets
//! ghost -g http://127.0.0.1:8080/monitors monitor runtime
//! ```

use clap::Parser;
use ghost::{Monitor, MonitorFuncs, Registry, ServeConfig};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use std::future::Future;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Ghost demo process
#[derive(Parser, Debug)]
#[command(name = "ghost-demo")]
#[command(about = "Demo process exposing ghost monitors over HTTP")]
#[command(version)]
struct Args {
    /// Server configuration file (TOML with `bind`, `port`, `path`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// HTTP server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Endpoint path
    #[arg(long)]
    path: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Counts samples while enabled.
struct SamplingMonitor {
    enabled: AtomicBool,
    samples: AtomicU64,
}

impl SamplingMonitor {
    fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
            samples: AtomicU64::new(0),
        }
    }

    fn sample(&self) {
        if self.enabled.load(Ordering::Relaxed) {
            self.samples.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl Monitor for SamplingMonitor {
    fn name(&self) -> &str {
        "sampling"
    }

    fn enable(&self) {
        self.samples.store(0, Ordering::Relaxed);
        self.enabled.store(true, Ordering::Relaxed);
    }

    fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
        info!(
            "sampling stopped after {} samples",
            self.samples.load(Ordering::Relaxed)
        );
    }

    fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = build_config(&args)?;

    let registry = Arc::new(Registry::new());

    let running = Arc::new(AtomicBool::new(false));
    let (on, off, state) = (running.clone(), running.clone(), running.clone());
    registry.register(Arc::new(MonitorFuncs::new(
        "runtime",
        move || on.store(true, Ordering::SeqCst),
        move || off.store(false, Ordering::SeqCst),
        move || state.load(Ordering::SeqCst),
    )));

    let sampling = Arc::new(SamplingMonitor::new());
    registry.register(sampling.clone());

    tokio::spawn(heartbeat(running, sampling));

    info!("Ghost demo v{}", env!("CARGO_PKG_VERSION"));
    info!("Monitors: {}", registry.names().join(", "));
    info!("Try: ghost -g {} targets", config.local_url());

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    ghost::serve_with_shutdown(
        listener,
        &config.path,
        registry,
        shutdown_on(tokio::signal::ctrl_c()),
    )
    .await?;

    Ok(())
}

fn build_config(args: &Args) -> Result<ServeConfig, Box<dyn std::error::Error>> {
    let mut config = match args.config {
        Some(ref path) => ServeConfig::from_file(path)?,
        None => ServeConfig::default(),
    };

    if let Some(ref bind) = args.bind {
        config.bind = bind.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(ref path) = args.path {
        config.path = path.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Resolves once `signal` fires. A signal that cannot be installed is
/// logged and stops the server.
async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Shutting down..."),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}

/// The demo's own business logic behind the monitors.
async fn heartbeat(running: Arc<AtomicBool>, sampling: Arc<SamplingMonitor>) {
    let start = Instant::now();
    let mut interval = tokio::time::interval(Duration::from_secs(1));

    loop {
        interval.tick().await;
        sampling.sample();
        if running.load(Ordering::SeqCst) {
            info!("runtime heartbeat, uptime {}s", start.elapsed().as_secs());
        }
    }
}
