// ABOUTME: Domain models re-exported from the core crate
// ABOUTME: The User aggregate root and its embedded Exercise values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common data models for exercise tracking

pub use exercise_tracker_core::models::*;
