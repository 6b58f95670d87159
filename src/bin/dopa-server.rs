// ABOUTME: HTTP server binary for the DOPA abstinence tracker
// ABOUTME: Loads configuration from the environment, initializes logging, and serves the routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DOPA Contributors

//! # DOPA Server Binary

use anyhow::{Context, Result};
use clap::Parser;
use dopa_intelligence::IntelligenceConfig;
use dopa_server::config::environment::ServerConfig;
use dopa_server::logging::LoggingConfig;
use dopa_server::resources::ServerResources;
use dopa_server::routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "dopa-server")]
#[command(about = "DOPA - abstinence tracker statistics API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    LoggingConfig::for_server(&config).init()?;

    info!("Starting DOPA server");
    info!("{}", config.summary());

    // Invalid DOPA_* overrides abort startup
    let intelligence = IntelligenceConfig::load().context("Invalid DOPA_* configuration")?;
    info!(
        kcal_per_kg_fat = intelligence.projection.kcal_per_kg_fat,
        "Statistics engine configured"
    );

    let addr = config.bind_addr();
    let resources = Arc::new(ServerResources::in_memory(config, intelligence));
    let app = routes::router(resources);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    display_available_endpoints(&addr.to_string());

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("DOPA server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(addr: &str) {
    info!("=== Available API Endpoints ===");
    info!("   Health:            GET  http://{addr}/health");
    info!("   Readiness:         GET  http://{addr}/ready");
    info!("   Statistics:        POST http://{addr}/api/stats");
    info!("   Onboarding:        POST http://{addr}/api/users/{{id}}/profile");
    info!("   Profile:           GET  http://{addr}/api/users/{{id}}/profile");
    info!("   Dashboard:         GET  http://{addr}/api/users/{{id}}/dashboard");
    info!("   Relapse:           POST http://{addr}/api/users/{{id}}/relapse");
    info!("   Emergency Tasks:   GET  http://{addr}/api/users/{{id}}/emergency-tasks");
    info!("   Personal Task:     PUT  http://{addr}/api/users/{{id}}/emergency-task");
    info!("   Badge Catalog:     GET  http://{addr}/api/badges");
    info!("   Badge Gallery:     GET  http://{addr}/api/users/{{id}}/badges");
    info!("   Badge Usage:       POST http://{addr}/api/users/{{id}}/badges/usage");
    info!("=== End of Endpoint List ===");
}
