// ABOUTME: Route handlers for the user, exercise, and log REST API
// ABOUTME: Thin HTTP layer that coerces bodies and query strings before delegating to services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! User routes
//!
//! Request bodies arrive either as JSON or as an HTML form post; both are
//! decoded into the same body types. Responses identify users by `_id`.

use crate::{
    constants::routes,
    errors::{AppError, AppResult},
    models::{serialize_duration, Exercise, UserId, UserSummary},
    resources::ServerResources,
    services::{
        exercises::{self, NewExercise},
        logs::{self, LogFilter},
        users,
    },
};
use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use exercise_tracker_core::dates::serialize_calendar_date;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Body of `POST /api/users`
#[derive(Debug, Deserialize)]
pub struct RegisterUserBody {
    /// Requested username
    #[serde(default)]
    pub username: String,
}

/// Duration as sent by the client: a JSON number or a numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    /// JSON number
    Number(f64),
    /// Form field or quoted JSON value
    Text(String),
}

impl DurationValue {
    fn to_minutes(&self) -> AppResult<f64> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| {
                    AppError::invalid_input(format!("duration must be a number, got {raw:?}"))
                }),
        }
    }
}

/// Body of `POST /api/users/:id/exercises`
#[derive(Debug, Deserialize)]
pub struct AddExerciseBody {
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Duration in minutes
    pub duration: Option<DurationValue>,
    /// Optional date; omitted, blank, or unparseable means now
    pub date: Option<String>,
}

impl TryFrom<AddExerciseBody> for NewExercise {
    type Error = AppError;

    fn try_from(body: AddExerciseBody) -> AppResult<Self> {
        let duration = body
            .duration
            .as_ref()
            .ok_or_else(|| AppError::invalid_input("duration is required"))?
            .to_minutes()?;

        Ok(Self {
            description: body.description,
            duration,
            date: body.date.filter(|d| !d.trim().is_empty()),
        })
    }
}

/// Query parameters for `GET /api/users/:id/logs`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LogQuery {
    /// Inclusive lower date bound
    pub from: Option<String>,
    /// Inclusive upper date bound
    pub to: Option<String>,
    /// Maximum number of entries
    pub limit: Option<String>,
}

impl LogQuery {
    /// Decode a raw query string; a repeated key keeps its first value
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the query string is not urlencoded
    pub fn from_raw(raw: Option<&str>) -> AppResult<Self> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw.unwrap_or_default())
            .map_err(|e| {
                warn!(error = %e, "Invalid query string");
                AppError::invalid_input(format!("Invalid query string: {e}"))
            })?;

        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "from" => &mut query.from,
                "to" => &mut query.to,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        Ok(query)
    }
}

/// Response for an appended exercise
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    /// Owning user id
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Owning username
    pub username: String,
    /// Exercise description
    pub description: String,
    /// Duration in minutes
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    /// Calendar date, e.g. `Mon Jan 01 2024`
    #[serde(serialize_with = "serialize_calendar_date")]
    pub date: DateTime<Utc>,
}

/// One entry of a log response
#[derive(Debug, Serialize)]
pub struct LogEntry {
    /// Exercise description
    pub description: String,
    /// Duration in minutes
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    /// Calendar date
    #[serde(serialize_with = "serialize_calendar_date")]
    pub date: DateTime<Utc>,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
        }
    }
}

/// Response for a log query
#[derive(Debug, Serialize)]
pub struct LogResponse {
    /// User id
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Username
    pub username: String,
    /// Number of entries in `log`
    pub count: usize,
    /// Matching exercises in insertion order
    pub log: Vec<LogEntry>,
}

/// Decode a request body as form data or JSON depending on `Content-Type`
fn parse_body<T: DeserializeOwned>(headers: &HeaderMap, body: &Bytes) -> AppResult<T> {
    let is_form = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

    if is_form {
        serde_urlencoded::from_bytes(body).map_err(|e| {
            warn!(error = %e, "Invalid form body");
            AppError::invalid_input(format!("Invalid form body: {e}"))
        })
    } else {
        serde_json::from_slice(body).map_err(|e| {
            warn!(error = %e, "Invalid JSON body");
            AppError::invalid_input(format!("Invalid JSON body: {e}"))
        })
    }
}

/// User routes handler
pub struct UserRoutes;

impl UserRoutes {
    /// Create all user, exercise, and log routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::USERS,
                get(Self::handle_list).post(Self::handle_register),
            )
            .route(routes::USER_EXERCISES, post(Self::handle_add_exercise))
            .route(routes::USER_LOGS, get(Self::handle_logs))
            .with_state(resources)
    }

    /// Handle POST /api/users - Register a username
    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> AppResult<Json<UserSummary>> {
        let request: RegisterUserBody = parse_body(&headers, &body)?;
        let user = users::register_user(&resources.database, &request.username).await?;
        Ok(Json(user))
    }

    /// Handle GET /api/users - List every user
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Vec<UserSummary>>> {
        let summaries = users::list_users(&resources.database).await?;
        Ok(Json(summaries))
    }

    /// Handle POST /api/users/:id/exercises - Append an exercise
    async fn handle_add_exercise(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        headers: HeaderMap,
        body: Bytes,
    ) -> AppResult<Json<ExerciseResponse>> {
        let request: AddExerciseBody = parse_body(&headers, &body)?;
        let added =
            exercises::add_exercise(&resources.database, &user_id, request.try_into()?).await?;

        Ok(Json(ExerciseResponse {
            id: added.user.id,
            username: added.user.username,
            description: added.exercise.description,
            duration: added.exercise.duration,
            date: added.exercise.date,
        }))
    }

    /// Handle GET /api/users/:id/logs - Filtered exercise log
    async fn handle_logs(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<String>,
        RawQuery(raw_query): RawQuery,
    ) -> AppResult<Json<LogResponse>> {
        let query = LogQuery::from_raw(raw_query.as_deref())?;
        let filter = LogFilter::parse(
            query.from.as_deref(),
            query.to.as_deref(),
            query.limit.as_deref(),
        );
        let log = logs::get_logs(&resources.database, &user_id, &filter).await?;

        Ok(Json(LogResponse {
            id: log.user.id,
            username: log.user.username,
            count: log.entries.len(),
            log: log.entries.into_iter().map(Into::into).collect(),
        }))
    }
}
