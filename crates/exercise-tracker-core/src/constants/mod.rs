// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for service identity, routes, ports, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list. Environment-derived values live in the server crate.

/// Service names for structured logging
pub mod service_names {
    /// Name reported by the HTTP server
    pub const EXERCISE_TRACKER_SERVER: &str = "exercise-tracker-server";
}

/// API routes
pub mod routes {
    /// Landing page
    pub const INDEX: &str = "/";
    /// User registration and listing
    pub const USERS: &str = "/api/users";
    /// Append an exercise to a user
    pub const USER_EXERCISES: &str = "/api/users/:id/exercises";
    /// Query a user's exercise log
    pub const USER_LOGS: &str = "/api/users/:id/logs";
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe
    pub const READY: &str = "/ready";
    /// Static assets mount point
    pub const PUBLIC: &str = "/public";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 3000;
}

/// Default values for environment-driven configuration
pub mod defaults {
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/exercise_tracker.db";
    /// Default bind address
    pub const HOST: &str = "0.0.0.0";
    /// Username created at startup when absent
    pub const BOOTSTRAP_USERNAME: &str = "newuser";
    /// Directory served under `/public`
    pub const STATIC_DIR: &str = "public";
    /// Allow any origin
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// HTTP header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}
