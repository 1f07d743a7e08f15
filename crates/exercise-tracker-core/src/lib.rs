// ABOUTME: Core types and constants for the exercise tracker service
// ABOUTME: Foundation crate with error handling, domain models, date handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Exercise Tracker Core
//!
//! Foundation crate providing shared types and constants for the exercise
//! tracker service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `DatabaseError`
//! - **models**: The `User` aggregate and its embedded `Exercise` values
//! - **dates**: Lenient date parsing and calendar-date rendering
//! - **constants**: Service-wide constants organized by domain

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (User, Exercise, `UserId`)
pub mod models;

/// Date parsing and calendar-date rendering for exercise records
pub mod dates;

/// Application constants organized by domain
pub mod constants;
