// ABOUTME: HTTP server binary for the FitPlan planner
// ABOUTME: Loads configuration, initializes logging, and serves the planner API until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # FitPlan Server Binary

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use fitplan_server::{config::ServerConfig, logging, resources::ServerResources, routes};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "fitplan-server")]
#[command(about = "FitPlan - calorie targets with generated diet and workout plans")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config = config.with_http_port(http_port);
    }

    info!("{}", config.summary());

    let bind_address = config.bind_address();
    let resources = Arc::new(ServerResources::new(config));
    if resources.generator.is_none() {
        warn!("Starting without plan generation; only calorie calculation is available");
    }

    let app = routes::router(resources);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    info!("FitPlan server listening on http://{bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("FitPlan server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
    }
}
