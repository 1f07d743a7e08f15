// ABOUTME: User aggregate database operations
// ABOUTME: Handles user creation, lookup by id or username, listing, and exercise log writes

use super::{Database, DbResult};
use crate::errors::DatabaseError;
use crate::models::{Exercise, User, UserId, UserSummary};
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

impl Database {
    /// Create the users table
    ///
    /// `username` is indexed but deliberately not `UNIQUE`: uniqueness is an
    /// application-level check performed before insert.
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub(super) async fn migrate_users(&self) -> DbResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL,
                exercises TEXT NOT NULL DEFAULT '[]',
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|source| DatabaseError::Migration {
            table: "users",
            source,
        })?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_username ON users(username)")
            .execute(&self.pool)
            .await
            .map_err(|source| DatabaseError::Migration {
                table: "users",
                source,
            })?;

        Ok(())
    }

    /// Insert a new user document
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise log cannot be encoded or the insert fails
    pub async fn create_user(&self, user: &User) -> DbResult<UserId> {
        let exercises = encode_exercises(user)?;

        sqlx::query(
            r"
            INSERT INTO users (id, username, exercises, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(exercises)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::query("create_user", e))?;

        Ok(user.id)
    }

    /// Load a user with its full exercise log
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is corrupt
    pub async fn get_user(&self, user_id: UserId) -> DbResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, exercises, created_at FROM users WHERE id = $1",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::query("get_user", e))?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Find the first user registered under an exact username
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is corrupt
    pub async fn get_user_by_username(&self, username: &str) -> DbResult<Option<UserSummary>> {
        let row = sqlx::query(
            "SELECT id, username FROM users WHERE username = $1 ORDER BY rowid LIMIT 1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::query("get_user_by_username", e))?;

        row.as_ref().map(row_to_summary).transpose()
    }

    /// List every user's id and username in registration order
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is corrupt
    pub async fn list_users(&self) -> DbResult<Vec<UserSummary>> {
        let rows = sqlx::query("SELECT id, username FROM users ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("list_users", e))?;

        rows.iter().map(row_to_summary).collect()
    }

    /// Persist the user's whole exercise log
    ///
    /// Returns `false` when no row matched the user's id.
    ///
    /// # Errors
    ///
    /// Returns an error if the exercise log cannot be encoded or the update fails
    pub async fn save_exercises(&self, user: &User) -> DbResult<bool> {
        let exercises = encode_exercises(user)?;

        let result = sqlx::query("UPDATE users SET exercises = $1 WHERE id = $2")
            .bind(exercises)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("save_exercises", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn encode_exercises(user: &User) -> DbResult<String> {
    serde_json::to_string(&user.exercises).map_err(|source| DatabaseError::Document {
        user_id: user.id.to_string(),
        source,
    })
}

fn parse_user_id(row: &SqliteRow) -> DbResult<UserId> {
    let raw: String = row
        .try_get("id")
        .map_err(|e| DatabaseError::query("decode_user", e))?;
    raw.parse().map_err(|e: uuid::Error| DatabaseError::InvalidRow {
        column: "id",
        reason: e.to_string(),
    })
}

fn row_to_summary(row: &SqliteRow) -> DbResult<UserSummary> {
    Ok(UserSummary {
        id: parse_user_id(row)?,
        username: row
            .try_get("username")
            .map_err(|e| DatabaseError::query("decode_user", e))?,
    })
}

fn row_to_user(row: &SqliteRow) -> DbResult<User> {
    let id = parse_user_id(row)?;
    let exercises_json: String = row
        .try_get("exercises")
        .map_err(|e| DatabaseError::query("decode_user", e))?;
    let exercises: Vec<Exercise> =
        serde_json::from_str(&exercises_json).map_err(|source| DatabaseError::Document {
            user_id: id.to_string(),
            source,
        })?;
    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(|e| DatabaseError::query("decode_user", e))?;

    Ok(User {
        id,
        username: row
            .try_get("username")
            .map_err(|e| DatabaseError::query("decode_user", e))?,
        exercises,
        created_at,
    })
}
