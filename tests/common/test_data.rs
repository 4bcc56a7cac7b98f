//! Test data generation utilities.
//!
//! This module builds a small SQLite dataset file with a known set of
//! stations and observations for exercising the kona server end to end.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

type Result<T> = std::result::Result<T, sqlx::Error>;

/// The most active station in the test dataset (5 observations)
pub const MOST_ACTIVE_STATION: &str = "USC00519281";

/// The less active station in the test dataset (2 observations)
pub const OTHER_STATION: &str = "USC00514830";

/// Total observation rows written by `create_test_dataset`
pub const OBSERVATION_COUNT: usize = 7;

/// Latest observation date for the most active station
pub const LATEST_DATE: &str = "2017-08-23";

/// 365 days before `LATEST_DATE`
pub const WINDOW_START: &str = "2016-08-23";

/// Creates a SQLite dataset file with a known observation pattern.
///
/// The most active station has five observations, one of which falls
/// outside the 365-day window ending at its latest date, and one of which
/// has a null precipitation reading.
pub async fn create_test_dataset(path: &Path) -> Result<()> {
    let pool = create_dataset_file(path).await?;

    let stations = [
        (
            MOST_ACTIVE_STATION,
            "WAIHEE 837.5, HI US",
            21.4517,
            -157.8489,
            32.9,
        ),
        (
            OTHER_STATION,
            "KUALOA RANCH HEADQUARTERS 886.9, HI US",
            21.5213,
            -157.8374,
            7.0,
        ),
    ];

    for (station, name, latitude, longitude, elevation) in stations {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(station)
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .bind(elevation)
        .execute(&pool)
        .await?;
    }

    // Five rows for the most active station; 2016-08-01 falls before the
    // 365-day window ending at 2017-08-23, and 2016-12-31 has no
    // precipitation reading. Two rows for the other station.
    let observations: [(&str, &str, Option<f64>, Option<f64>); 7] = [
        (MOST_ACTIVE_STATION, "2016-08-01", Some(0.08), Some(77.0)),
        (MOST_ACTIVE_STATION, "2016-12-31", None, Some(70.0)),
        (MOST_ACTIVE_STATION, "2017-01-01", Some(0.05), Some(68.0)),
        (MOST_ACTIVE_STATION, "2017-06-01", Some(0.1), Some(80.0)),
        (MOST_ACTIVE_STATION, LATEST_DATE, Some(0.45), Some(82.0)),
        (OTHER_STATION, "2015-01-01", Some(0.2), Some(65.0)),
        (OTHER_STATION, "2017-05-15", Some(0.3), Some(79.0)),
    ];

    for (station, date, prcp, tobs) in observations {
        sqlx::query(
            "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(station)
        .bind(date)
        .bind(prcp)
        .bind(tobs)
        .execute(&pool)
        .await?;
    }

    pool.close().await;

    Ok(())
}

/// Creates a SQLite dataset file with the expected schema and no rows
pub async fn create_empty_dataset(path: &Path) -> Result<()> {
    let pool = create_dataset_file(path).await?;
    pool.close().await;

    Ok(())
}

/// Create the dataset file and its two tables, returning a writable pool
async fn create_dataset_file(path: &Path) -> Result<SqlitePool> {
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

    Ok(pool)
}
