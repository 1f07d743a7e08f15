// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory databases, server resources, and user helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `exercise_tracker`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use axum::Router;
use exercise_tracker::{
    config::ServerConfig,
    database::Database,
    models::UserSummary,
    resources::ServerResources,
    server::ExerciseTrackerServer,
    services::users::register_user,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        // Another test binary module may already have installed a subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    let database = Arc::new(Database::new("sqlite::memory:").await?);
    Ok(database)
}

/// Create test `ServerResources` backed by an in-memory database
pub async fn create_test_server_resources() -> Result<Arc<ServerResources>> {
    init_test_logging();
    let config = Arc::new(ServerConfig::for_testing());
    let database = Database::connect(&config.database.url).await?;
    Ok(Arc::new(ServerResources::new(database, config)))
}

/// Full application router with every layer, over fresh in-memory resources
pub async fn create_test_app() -> Result<(Router, Arc<ServerResources>)> {
    let resources = create_test_server_resources().await?;
    let router = ExerciseTrackerServer::router(&resources);
    Ok((router, resources))
}

/// Register a user directly through the service layer
pub async fn create_test_user(database: &Database, username: &str) -> Result<UserSummary> {
    Ok(register_user(database, username).await?)
}
