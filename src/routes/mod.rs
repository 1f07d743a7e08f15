// ABOUTME: Route module organization for the exercise tracker HTTP endpoints
// ABOUTME: Provides centralized route definitions organized by domain with clean separation of concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the exercise tracker
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Health check and readiness routes
pub mod health;
/// User, exercise, and log routes
pub mod users;
/// Landing page and static assets
pub mod web;

/// Health check route handlers
pub use health::HealthRoutes;
/// User route handlers
pub use users::UserRoutes;
/// Landing page and static asset handlers
pub use web::WebRoutes;
