// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Database Management
//!
//! Persistence for the `User` aggregate. Each user is one row; its exercise
//! log is embedded as a JSON document in the same row, so the aggregate is
//! always loaded and written as a unit.

mod users;

use crate::config::DatabaseUrl;
use crate::errors::DatabaseError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

/// Result alias for storage operations
pub type DbResult<T> = Result<T, DatabaseError>;

/// Database manager for user and exercise storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and prepare the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened or schema creation fails
    pub async fn new(database_url: &str) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(DatabaseError::Connection)?
            // Ensure SQLite creates the database file if it doesn't exist
            .create_if_missing(true);

        let is_memory = DatabaseUrl::parse_url(database_url)
            .map(|url| url.is_memory())
            .unwrap_or(false);

        // Every connection to `:memory:` is its own database, so pin the pool
        // to one long-lived connection
        let pool_options = if is_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(DatabaseError::Connection)?;

        let db = Self { pool };
        db.migrate().await?;

        info!(in_memory = is_memory, "Database ready");
        Ok(db)
    }

    /// Open the database described by a parsed [`DatabaseUrl`], creating
    /// parent directories for file-backed databases
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the connection fails
    pub async fn connect(url: &DatabaseUrl) -> DbResult<Self> {
        if let DatabaseUrl::SQLite { path } = url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| DatabaseError::Connection(sqlx::Error::Io(e)))?;
            }
        }
        Self::new(&url.to_connection_string()).await
    }

    /// Run idempotent schema creation
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index cannot be created
    pub async fn migrate(&self) -> DbResult<()> {
        self.migrate_users().await?;
        debug!("Schema up to date");
        Ok(())
    }

    /// Cheap round-trip used by the readiness probe
    ///
    /// # Errors
    ///
    /// Returns an error if the database does not answer
    pub async fn ping(&self) -> DbResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("ping", e))?;
        Ok(())
    }

    /// Close every pooled connection; called once on shutdown
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connections closed");
    }
}
