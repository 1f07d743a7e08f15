// ABOUTME: Exercise append business logic
// ABOUTME: Resolves the owning user, defaults the date, and persists the whole aggregate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use exercise_tracker_core::dates::parse_date;
use tracing::{debug, info};

use super::load_user;
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, UserSummary};

/// Input for a new exercise, already coerced from the request body
#[derive(Debug, Clone)]
pub struct NewExercise {
    /// Free-form description
    pub description: String,
    /// Duration in minutes
    pub duration: f64,
    /// Raw date string; absent, blank, or unparseable means "now"
    pub date: Option<String>,
}

/// The appended exercise together with its owner
#[derive(Debug, Clone)]
pub struct AddedExercise {
    /// Owning user
    pub user: UserSummary,
    /// The exercise as stored
    pub exercise: Exercise,
}

/// Append an exercise to a user's log
///
/// Every append rewrites the user's whole exercise document, so two
/// concurrent appends to the same user can lose one of the writes.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank description or non-finite duration,
/// `UserNotFound` if the user does not exist, or a storage failure
pub async fn add_exercise(
    database: &Database,
    raw_user_id: &str,
    input: NewExercise,
) -> AppResult<AddedExercise> {
    if input.description.trim().is_empty() {
        return Err(AppError::invalid_input("description is required"));
    }
    if !input.duration.is_finite() {
        return Err(AppError::invalid_input("duration must be a number"));
    }

    let mut user = load_user(database, raw_user_id).await?;

    let date = input.date.as_deref().and_then(parse_date);
    if date.is_none() {
        debug!(raw_date = ?input.date, "No usable date supplied, defaulting to now");
    }

    let exercise = user
        .push_exercise(Exercise::new(input.description, input.duration, date))
        .clone();

    if !database.save_exercises(&user).await? {
        return Err(AppError::user_not_found(raw_user_id));
    }

    info!(
        user.id = %user.id,
        exercise.duration = exercise.duration,
        exercise.count = user.exercises.len(),
        "Exercise logged"
    );

    Ok(AddedExercise {
        user: user.summary(),
        exercise,
    })
}
