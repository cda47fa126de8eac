// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Ghost CLI
//!
//! Enables, disables and lists the monitors of a running process that
//! serves the ghost monitor endpoint.
//!
//! # Usage
//!
//! ```bash
//! # List available targets and their status
//! ghost -g http://localhost:8080/monitors targets
//!
//! # Activate / deactivate monitoring of a target
//! ghost -g http://localhost:8080/monitors monitor runtime
//! ghost -g http://localhost:8080/monitors unmonitor runtime
//!
//! # Remote taken from a config file or the environment
//! ghost --config ghost.toml targets
//! GHOST_REMOTE=http://localhost:8080/monitors ghost targets
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use ghost::{ClientConfig, GhostClient, MonitorStates};
use std::path::PathBuf;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted when neither `-g` nor a config file names
/// the remote.
const REMOTE_ENV: &str = "GHOST_REMOTE";

/// Ghost - enable/disable monitoring targets
#[derive(Parser, Debug)]
#[command(name = "ghost")]
#[command(about = "Enable/disable monitoring targets of a running process")]
#[command(version)]
struct Args {
    /// Remote ghost address (e.g. http://localhost:8080/monitors)
    #[arg(short = 'g', long)]
    remote: Option<String>,

    /// Configuration file (TOML with `remote` and `timeout_secs`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Activate monitoring of a target
    Monitor {
        /// Monitor name
        target: String,
    },

    /// Deactivate monitoring of a target
    Unmonitor {
        /// Monitor name
        target: String,
    },

    /// List available monitoring targets and their status
    Targets,
}

#[derive(Tabled)]
struct TargetRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&args)?;
    let client = GhostClient::from_config(&config)?;
    tracing::debug!(remote = client.url(), "using remote");

    match args.command {
        Commands::Monitor { target } => cmd_monitor(&client, &target),
        Commands::Unmonitor { target } => cmd_unmonitor(&client, &target),
        Commands::Targets => cmd_targets(&client),
    }
}

fn load_config(args: &Args) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let mut config = match args.config {
        Some(ref path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };

    let remote = resolve_remote(
        args.remote.clone(),
        config.remote.take(),
        std::env::var(REMOTE_ENV).ok(),
    )
    .ok_or("missing remote ghost address (use -g, --config or GHOST_REMOTE)")?;
    config.remote = Some(remote);

    Ok(config)
}

/// Flag beats config file beats environment.
fn resolve_remote(
    flag: Option<String>,
    file: Option<String>,
    env: Option<String>,
) -> Option<String> {
    flag.or(file)
        .or(env)
        .filter(|remote| !remote.trim().is_empty())
}

fn cmd_monitor(client: &GhostClient, target: &str) -> Result<(), Box<dyn std::error::Error>> {
    client.enable_monitor(target)?;
    tracing::info!(monitor = target, "monitor enabled");
    Ok(())
}

fn cmd_unmonitor(client: &GhostClient, target: &str) -> Result<(), Box<dyn std::error::Error>> {
    client.disable_monitor(target)?;
    tracing::info!(monitor = target, "monitor disabled");
    Ok(())
}

fn cmd_targets(client: &GhostClient) -> Result<(), Box<dyn std::error::Error>> {
    let monitors = client.list_monitors()?;

    if monitors.is_empty() {
        println!("{}", "No monitoring targets registered".yellow());
    } else {
        println!("{}", render_targets(&monitors));
    }

    Ok(())
}

fn render_targets(monitors: &MonitorStates) -> String {
    let rows: Vec<TargetRow> = monitors
        .iter()
        .map(|(name, enabled)| TargetRow {
            name: name.clone(),
            status: if *enabled { "enabled" } else { "disabled" },
        })
        .collect();

    Table::new(rows).to_string()
}
