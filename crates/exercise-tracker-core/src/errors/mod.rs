// ABOUTME: Unified error handling with standard error codes and HTTP status mapping
// ABOUTME: Defines AppError, ErrorCode, and the JSON error envelope returned to clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure a request can hit is one of a handful of kinds:
//!
//! - client-caused: duplicate username (400), unknown user (404), unusable input (400)
//! - storage failures (500), surfaced immediately and never retried
//! - configuration and internal failures (500), mostly at startup
//!
//! Handlers return [`AppResult`]; with the `http-response` feature enabled,
//! [`AppError`] renders itself as a JSON error envelope with the mapped status.

/// Storage-layer errors with `sqlx` conversion
#[cfg(feature = "database-errors")]
pub mod database;

#[cfg(feature = "database-errors")]
pub use database::DatabaseError;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard error codes used throughout the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Request body is missing a required field or could not be coerced
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Resource Management (4000-4999)
    /// No user exists with the requested identifier
    #[serde(rename = "USER_NOT_FOUND")]
    UserNotFound = 4000,
    /// A user with the requested username is already registered
    #[serde(rename = "DUPLICATE_USERNAME")]
    DuplicateUsername = 4001,

    // Configuration (6000-6999)
    /// Startup configuration could not be loaded
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// A storage operation failed
    #[serde(rename = "STORAGE_FAILURE")]
    StorageFailure = 9001,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            // Duplicate registrations are a plain client error, not a 409
            Self::InvalidInput | Self::DuplicateUsername => 400,
            Self::UserNotFound => 404,
            Self::ConfigError | Self::InternalError | Self::StorageFailure => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::UserNotFound => "The requested user was not found",
            Self::DuplicateUsername => "The username is already taken",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
            Self::StorageFailure => "Storage operation failed",
        }
    }

    /// Whether the client caused this error
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        self.http_status() < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the service
#[derive(Debug, thiserror::Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Username already registered
    pub fn duplicate_username(username: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::DuplicateUsername,
            format!("Username '{}' already exists", username.into()),
        )
    }

    /// User not found
    pub fn user_not_found(user_id: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::UserNotFound,
            format!("User '{}' not found", user_id.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Storage failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageFailure, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of the JSON error envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
            },
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(format!("Serialization failed: {error}")).with_source(error)
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                error.code = ?self.code,
                error.message = %self.message,
                error.source = ?self.source,
                "Request failed"
            );
        } else {
            tracing::debug!(
                error.code = ?self.code,
                error.message = %self.message,
                "Request rejected"
            );
        }

        (status, axum::Json(ErrorResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::DuplicateUsername.http_status(), 400);
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::UserNotFound.http_status(), 404);
        assert_eq!(ErrorCode::StorageFailure.http_status(), 500);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_client_error_classification() {
        assert!(ErrorCode::UserNotFound.is_client_error());
        assert!(ErrorCode::DuplicateUsername.is_client_error());
        assert!(!ErrorCode::StorageFailure.is_client_error());
    }

    #[test]
    fn test_app_error_creation() {
        let error = AppError::user_not_found("abc");

        assert_eq!(error.code, ErrorCode::UserNotFound);
        assert!(error.message.contains("abc"));
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::duplicate_username("alice");
        let response = ErrorResponse::from(error);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"]["code"], "DUPLICATE_USERNAME");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("alice"));
        assert_eq!(json["error"].as_object().unwrap().len(), 2);
    }
}
