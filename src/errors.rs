// ABOUTME: Unified error handling re-exported from the core crate
// ABOUTME: Single import point for AppError, ErrorCode, and DatabaseError in the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error taxonomy lives in `exercise_tracker_core` so it can be shared by
//! every crate in the workspace; this module re-exports it for the server.

pub use exercise_tracker_core::errors::*;
