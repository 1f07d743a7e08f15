// ABOUTME: User registration and listing business logic
// ABOUTME: Check-then-insert username registration and the startup bootstrap record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{debug, info};

use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{User, UserSummary};

/// Register a new username
///
/// The existence check and the insert are two separate statements with no
/// unique index behind them, so two concurrent registrations of the same
/// name can both succeed.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank username, `DuplicateUsername` if the
/// name is already registered, or a storage failure
pub async fn register_user(database: &Database, username: &str) -> AppResult<UserSummary> {
    if username.trim().is_empty() {
        return Err(AppError::invalid_input("username is required"));
    }

    if database.get_user_by_username(username).await?.is_some() {
        debug!(user.name = %username, "Rejected duplicate registration");
        return Err(AppError::duplicate_username(username));
    }

    let user = User::new(username);
    database.create_user(&user).await?;

    info!(user.id = %user.id, user.name = %user.username, "User registered");
    Ok(user.summary())
}

/// List every registered user without their exercise logs
///
/// # Errors
///
/// Returns a storage failure if the listing query fails
pub async fn list_users(database: &Database) -> AppResult<Vec<UserSummary>> {
    Ok(database.list_users().await?)
}

/// Create the startup bootstrap user unless one with that name already exists
///
/// Returns the created user, or `None` when it was already present.
///
/// # Errors
///
/// Returns a storage failure if the lookup or insert fails
pub async fn ensure_bootstrap_user(
    database: &Database,
    username: &str,
) -> AppResult<Option<UserSummary>> {
    match register_user(database, username).await {
        Ok(summary) => {
            info!(user.id = %summary.id, "Bootstrap user created");
            Ok(Some(summary))
        }
        Err(e) if e.code.is_client_error() => {
            debug!(user.name = %username, "Bootstrap user already present");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    async fn test_database() -> Database {
        Database::new("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn test_register_then_duplicate() {
        let db = test_database().await;

        let first = register_user(&db, "alice").await.unwrap();
        assert_eq!(first.username, "alice");

        let second = register_user(&db, "alice").await.unwrap_err();
        assert_eq!(second.code, ErrorCode::DuplicateUsername);
        assert_eq!(second.http_status(), 400);
    }

    #[tokio::test]
    async fn test_usernames_are_case_sensitive() {
        let db = test_database().await;

        register_user(&db, "Alice").await.unwrap();
        assert!(register_user(&db, "alice").await.is_ok());
    }

    #[tokio::test]
    async fn test_blank_username_rejected() {
        let db = test_database().await;

        let err = register_user(&db, "   ").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(list_users(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_user_is_idempotent() {
        let db = test_database().await;

        assert!(ensure_bootstrap_user(&db, "newuser").await.unwrap().is_some());
        assert!(ensure_bootstrap_user(&db, "newuser").await.unwrap().is_none());
        assert_eq!(list_users(&db).await.unwrap().len(), 1);
    }
}
