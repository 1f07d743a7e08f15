// ABOUTME: Centralized resource container for dependency injection in HTTP handlers
// ABOUTME: Shares the database handle and server configuration across requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Holds the shared, expensive-to-build handles every route needs. Handlers
//! receive it as `State<Arc<ServerResources>>`.

use crate::config::ServerConfig;
use crate::database::Database;
use std::sync::Arc;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Persistence handle
    pub database: Arc<Database>,
    /// Loaded server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        Self {
            database: Arc::new(database),
            config,
        }
    }
}
