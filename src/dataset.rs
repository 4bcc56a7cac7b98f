//! SQLite dataset access.
//!
//! This module opens the pre-built dataset file read-only, validates that
//! the tables and columns the query layer depends on are present, and
//! gathers summary statistics at startup. The dataset is never written to
//! for the lifetime of the process.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{KonaError, Result};
use crate::state::DatasetSummary;

/// Tables and the columns the query layer depends on. Extra columns in the
/// file (latitude, elevation, row ids) are ignored.
const EXPECTED_SCHEMA: &[(&str, &[&str])] = &[
    ("measurement", &["station", "date", "prcp", "tobs"]),
    ("station", &["station", "name"]),
];

/// Open a read-only connection pool over the dataset file
pub async fn connect(path: &Path) -> Result<SqlitePool> {
    // Check if the file exists; SQLite would otherwise report a less
    // helpful "unable to open database file"
    if !path.exists() {
        return Err(KonaError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let options = SqliteConnectOptions::new().filename(path).read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    info!("Opened dataset file: {}", path.display());

    Ok(pool)
}

/// Validate that the expected tables and columns exist in the dataset.
///
/// Fails fast with a diagnostic naming the first missing table or column
/// rather than letting a query fail later with an opaque SQL error.
pub async fn validate_schema(pool: &SqlitePool) -> Result<()> {
    for (table, columns) in EXPECTED_SCHEMA {
        let found: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?1)")
            .bind(table)
            .fetch_all(pool)
            .await?;

        if found.is_empty() {
            return Err(KonaError::Schema {
                message: format!("Missing table: {}", table),
            });
        }

        debug!("Table {} has columns: {:?}", table, found);

        for column in *columns {
            if !found.iter().any(|c| c == column) {
                return Err(KonaError::Schema {
                    message: format!("Table {} is missing column: {}", table, column),
                });
            }
        }
    }

    Ok(())
}

/// Gather summary statistics from the dataset
pub async fn summarize(pool: &SqlitePool) -> Result<DatasetSummary> {
    let observation_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM measurement")
        .fetch_one(pool)
        .await?;

    let station_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM station")
        .fetch_one(pool)
        .await?;

    let (earliest_date, latest_date): (Option<String>, Option<String>) =
        sqlx::query_as("SELECT MIN(date), MAX(date) FROM measurement")
            .fetch_one(pool)
            .await?;

    Ok(DatasetSummary {
        observation_count,
        station_count,
        earliest_date,
        latest_date,
    })
}

/// Create a test dataset file with sample data for testing
#[cfg(test)]
async fn create_test_dataset(path: &Path) -> Result<()> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::query(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT UNIQUE,
            name TEXT,
            latitude REAL,
            longitude REAL,
            elevation REAL
        )",
    )
    .execute(&pool)
    .await?;

    sqlx::query(
        "CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp REAL,
            tobs REAL
        )",
    )
    .execute(&pool)
    .await?;

    sqlx::query("INSERT INTO station (station, name) VALUES (?1, ?2)")
        .bind("USC001")
        .bind("UPPER VALLEY")
        .execute(&pool)
        .await?;

    for (date, prcp, tobs) in [
        ("2017-01-01", Some(0.0), Some(65.0)),
        ("2017-06-01", Some(0.1), Some(80.0)),
    ] {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind("USC001")
            .bind(date)
            .bind(prcp)
            .bind(tobs)
            .execute(&pool)
            .await?;
    }

    pool.close().await;

    Ok(())
}
