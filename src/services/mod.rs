// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: User registration, exercise appends, and exercise log queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Protocol-agnostic business logic. Route handlers parse HTTP input, call a
//! service, and shape the result; services talk to the [`Database`] and
//! return [`AppResult`] values carrying the error taxonomy.
//!
//! [`Database`]: crate::database::Database
//! [`AppResult`]: crate::errors::AppResult

/// Exercise appends to a user's log
pub mod exercises;

/// Filtered, limited views over a user's exercise log
pub mod logs;

/// User registration and listing
pub mod users;

use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{User, UserId};

/// Resolve a client-supplied identifier to a stored user
///
/// Identifiers that do not parse are indistinguishable from unknown ones.
///
/// # Errors
///
/// Returns `UserNotFound` if no user matches, or a storage failure
pub(crate) async fn load_user(database: &Database, raw_id: &str) -> AppResult<User> {
    let Ok(user_id) = raw_id.parse::<UserId>() else {
        return Err(AppError::user_not_found(raw_id));
    };

    database
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::user_not_found(raw_id))
}
