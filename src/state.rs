//! Application state management for kona.
//!
//! This module defines the shared state that is passed to all handlers,
//! containing the dataset connection pool and the startup summary.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::config::Config;

/// Summary statistics for the loaded dataset, gathered once at startup.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    /// Total number of observation rows
    pub observation_count: i64,
    /// Total number of stations
    pub station_count: i64,
    /// Earliest observation date, if any rows exist
    pub earliest_date: Option<String>,
    /// Latest observation date, if any rows exist
    pub latest_date: Option<String>,
}

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Read-only connection pool over the dataset file
    pub pool: SqlitePool,
    /// Dataset summary from startup
    pub summary: DatasetSummary,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, pool: SqlitePool, summary: DatasetSummary) -> Self {
        Self {
            config,
            pool,
            summary,
        }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, pool: SqlitePool, summary: DatasetSummary) -> Arc<Self> {
        Arc::new(Self::new(config, pool, summary))
    }
}
