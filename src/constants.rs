// ABOUTME: System-wide constants and environment-backed configuration values
// ABOUTME: Re-exports core constants and reads deployment settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Application constants and environment-based configuration values.
//! This module provides both hardcoded constants and environment variable configuration.

pub use exercise_tracker_core::constants::{defaults, headers, ports, routes, service_names};

/// Environment-based configuration
///
/// Each accessor reads the process environment once per call; `ServerConfig`
/// calls them once at startup.
pub mod env_config {
    use super::{defaults, ports};
    use std::env;

    /// Read the first set, non-empty variable among `keys`
    fn first_non_empty(keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|key| env::var(key).ok())
            .map(|value| value.trim().to_owned())
            .find(|value| !value.is_empty())
    }

    /// Get HTTP port from `PORT` or `HTTP_PORT`, or the default
    #[must_use]
    pub fn http_port() -> u16 {
        first_non_empty(&["PORT", "HTTP_PORT"])
            .and_then(|s| s.parse().ok())
            .unwrap_or(ports::DEFAULT_HTTP_PORT)
    }

    /// Get bind address from environment or default
    #[must_use]
    pub fn host() -> String {
        first_non_empty(&["HOST"]).unwrap_or_else(|| defaults::HOST.to_owned())
    }

    /// Get database connection string from `DATABASE_URL` or `MONGO_URI`, or the default
    #[must_use]
    pub fn database_url() -> String {
        first_non_empty(&["DATABASE_URL", "MONGO_URI"])
            .unwrap_or_else(|| defaults::DATABASE_URL.to_owned())
    }

    /// Get allowed CORS origins from environment or default
    #[must_use]
    pub fn cors_allowed_origins() -> String {
        first_non_empty(&["CORS_ALLOWED_ORIGINS"])
            .unwrap_or_else(|| defaults::CORS_ALLOWED_ORIGINS.to_owned())
    }

    /// Get the bootstrap username; an explicitly empty value disables it
    #[must_use]
    pub fn bootstrap_username() -> Option<String> {
        match env::var("BOOTSTRAP_USERNAME") {
            Ok(value) if value.trim().is_empty() => None,
            Ok(value) => Some(value.trim().to_owned()),
            Err(_) => Some(defaults::BOOTSTRAP_USERNAME.to_owned()),
        }
    }

    /// Get static asset directory from environment or default
    #[must_use]
    pub fn static_dir() -> String {
        first_non_empty(&["STATIC_DIR"]).unwrap_or_else(|| defaults::STATIC_DIR.to_owned())
    }

    /// Get deployment environment name from environment or default
    #[must_use]
    pub fn environment() -> String {
        first_non_empty(&["ENVIRONMENT"]).unwrap_or_else(|| "development".to_owned())
    }
}
