// ABOUTME: Landing page and static asset routes for browser clients
// ABOUTME: Serves the embedded HTML form page and the configured public directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::{config::ServerConfig, constants::routes};
use axum::{response::Html, routing::get, Router};
use tower_http::services::ServeDir;

/// Landing page compiled into the binary
const INDEX_HTML: &str = include_str!("../../views/index.html");

/// Browser-facing routes
pub struct WebRoutes;

impl WebRoutes {
    /// Create the landing page route and mount static assets under `/public`
    #[must_use]
    pub fn routes(config: &ServerConfig) -> Router {
        async fn index_handler() -> Html<&'static str> {
            Html(INDEX_HTML)
        }

        Router::new()
            .route(routes::INDEX, get(index_handler))
            .nest_service(routes::PUBLIC, ServeDir::new(&config.static_dir))
    }
}
