// ABOUTME: Core data models for the exercise tracker service
// ABOUTME: Re-exports the User aggregate root and its embedded Exercise values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! A [`User`] is the only aggregate root. It owns an ordered, append-only list
//! of [`Exercise`] values which have no identity of their own; every write to
//! an exercise goes through its owning user.

mod exercise;
mod user;

pub use exercise::{serialize_duration, Exercise};
pub use user::{User, UserId, UserSummary};
