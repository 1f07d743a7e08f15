// ABOUTME: Structured error types for storage operations
// ABOUTME: Wraps sqlx and document (de)serialization failures with operation context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Could not open or configure the connection pool
    #[error("Failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    /// Schema creation failed during startup
    #[error("Failed to prepare schema for '{table}': {source}")]
    Migration {
        /// Table being created
        table: &'static str,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// A query failed
    #[error("Database query failed during {operation}: {source}")]
    Query {
        /// Operation name, e.g. `insert_user`
        operation: &'static str,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// The embedded exercise document could not be encoded or decoded
    #[error("Corrupt exercise document for user {user_id}: {source}")]
    Document {
        /// Owning user
        user_id: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// A stored row could not be mapped to a domain value
    #[error("Invalid stored value in column '{column}': {reason}")]
    InvalidRow {
        /// Offending column
        column: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

impl DatabaseError {
    /// Wrap a driver error with the name of the operation that produced it
    #[must_use]
    pub const fn query(operation: &'static str, source: sqlx::Error) -> Self {
        Self::Query { operation, source }
    }
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        Self::new(ErrorCode::StorageFailure, error.to_string()).with_source(error)
    }
}
