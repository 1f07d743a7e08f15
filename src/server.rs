// ABOUTME: HTTP server assembly and lifecycle for the exercise tracker
// ABOUTME: Merges domain routers, applies middleware layers, and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP server
//!
//! Layers, outermost first: CORS, request ID, HTTP tracing.

use crate::{
    middleware::{request_id_middleware, setup_cors},
    resources::ServerResources,
    routes::{HealthRoutes, UserRoutes, WebRoutes},
};
use anyhow::{Context, Result};
use axum::{middleware, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Exercise tracker HTTP server
pub struct ExerciseTrackerServer {
    resources: Arc<ServerResources>,
}

impl ExerciseTrackerServer {
    /// Create a server around shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete application router
    #[must_use]
    pub fn router(resources: &Arc<ServerResources>) -> Router {
        Router::new()
            .merge(UserRoutes::routes(Arc::clone(resources)))
            .merge(HealthRoutes::routes(Arc::clone(resources)))
            .merge(WebRoutes::routes(&resources.config))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_id_middleware))
            .layer(setup_cors(&resources.config))
    }

    /// Bind `host:port` and serve until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound or serving fails
    pub async fn run(self, port: u16) -> Result<()> {
        let address = format!("{}:{port}", self.resources.config.host);
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;

        self.serve(listener).await
    }

    /// Serve on an already-bound listener until a shutdown signal arrives
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails while accepting connections
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let local_addr = listener.local_addr().context("Listener has no address")?;
        info!(address = %local_addr, "Your app is listening on port {}", local_addr.port());

        let app = Self::router(&self.resources);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        info!("HTTP server stopped, closing database");
        self.resources.database.close().await;
        Ok(())
    }
}

/// Resolve on Ctrl+C or, on Unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
