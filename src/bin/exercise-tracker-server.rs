// ABOUTME: Server binary for the exercise tracker HTTP API
// ABOUTME: Loads configuration, opens the database, seeds the bootstrap user, and serves requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Exercise Tracker Server Binary
//!
//! Starts the HTTP API backed by the configured `SQLite` database.

use anyhow::Result;
use clap::Parser;
use exercise_tracker::{
    config::{load_dotenv, ServerConfig},
    database::Database, logging, resources::ServerResources,
    server::ExerciseTrackerServer, services::users::ensure_bootstrap_user,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "exercise-tracker-server")]
#[command(about = "Exercise tracker - register users, log exercises, query exercise logs")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // .env must be applied before the subscriber reads RUST_LOG and LOG_FORMAT
    let dotenv = load_dotenv();
    logging::init_from_env()?;
    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded environment file"),
        Err(e) => warn!("No .env file found or failed to load: {e}"),
    }

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting exercise tracker");
    info!("{}", config.summary());

    let database = Database::connect(&config.database.url).await?;
    info!("Database URL: {}", config.database.url);

    if let Some(username) = config.bootstrap_username.as_deref() {
        // Startup proceeds whether or not the bootstrap record could be written
        if let Err(e) = ensure_bootstrap_user(&database, username).await {
            warn!(error = %e, username, "Failed to create bootstrap user");
        }
    }

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
    display_available_endpoints(&resources.config.host, port);

    let server = ExerciseTrackerServer::new(resources);
    if let Err(e) = server.run(port).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(host: &str, port: u16) {
    info!("=== Available API Endpoints ===");
    info!("   Landing Page:      GET  http://{host}:{port}/");
    info!("   Register User:     POST http://{host}:{port}/api/users");
    info!("   List Users:        GET  http://{host}:{port}/api/users");
    info!("   Add Exercise:      POST http://{host}:{port}/api/users/{{_id}}/exercises");
    info!("   Exercise Log:      GET  http://{host}:{port}/api/users/{{_id}}/logs?[from][&to][&limit]");
    info!("   Health:            GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
