//! Pipeline status service: the CI/CD demo backend.
//!
//! This is the application entry point. It parses CLI arguments, loads
//! configuration from a TOML file, initializes tracing, captures the process
//! start instant, sets up the Axum router with the three status routes, and
//! starts the HTTP server.

mod config;
mod http;
mod memory;
mod middleware;
mod routes;
mod state;

use std::sync::Arc;

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use memory::SystemMemoryMonitor;
use routes::create_router;
use state::AppState;

/// Status API backend for the AWS CI/CD pipeline demo
#[derive(Parser, Debug)]
#[command(name = "pipeline-status", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "pipeline_status=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration first so the log format can honor it
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Loaded configuration");

    // The start instant is captured once and never mutated; all uptime
    // figures derive from it
    let started_at = Utc::now();

    // Memory monitor backing the health endpoint
    let memory = Arc::new(SystemMemoryMonitor::new());

    // Create application state
    let state = AppState::new(config.clone(), started_at, memory);

    // Create router
    let app = create_router(state);

    // Start server; blocks until shutdown
    http::start_server(app, &config).await?;

    Ok(())
}
