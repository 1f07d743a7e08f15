// ABOUTME: Main library entry point for the exercise tracker HTTP API
// ABOUTME: Registers users, records exercises, and answers filtered exercise log queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Exercise Tracker
//!
//! A small HTTP service where users register a username, log exercises
//! (description, duration, date), and read back their exercise log narrowed
//! by date range and limit.
//!
//! ## Architecture
//!
//! - **Routes**: thin axum handlers that coerce request bodies and queries
//! - **Services**: registration, exercise append, and log filtering rules
//! - **Database**: `SQLite` persistence of the user aggregate
//! - **Config**: environment-driven server configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use exercise_tracker::config::ServerConfig;
//! use exercise_tracker::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Exercise tracker configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants and environment accessors
pub mod constants;

/// `SQLite` persistence for users and their exercises
pub mod database;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request IDs)
pub mod middleware;

/// Domain models
pub mod models;

/// Shared server resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// HTTP server assembly and lifecycle
pub mod server;

/// Business logic
pub mod services;
