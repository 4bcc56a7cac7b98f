//! Read-only queries over the weather observation dataset.
//!
//! This module contains the typed record structs serialized to the API
//! responses, and the query functions the handlers call. Every function
//! borrows a connection for the duration of a single query; date filters
//! compare TEXT lexicographically, which is correct for zero-padded
//! YYYY-MM-DD strings.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use sqlx::{FromRow, SqliteConnection};

use crate::error::{KonaError, Result};

/// One observation projected to its date and precipitation reading
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PrecipitationRecord {
    /// Observation date (YYYY-MM-DD)
    pub date: String,
    /// Precipitation in inches, null where the station reported none
    pub precipitation: Option<f64>,
}

/// A weather station
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StationRecord {
    /// Unique station identifier
    pub station_id: String,
    /// Human-readable station name
    pub station_name: String,
}

/// One observation projected to its date and temperature reading
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TemperatureRecord {
    /// Observation date (YYYY-MM-DD)
    pub date: String,
    /// Observed temperature, null where the station reported none
    pub temperature: Option<f64>,
}

/// One observation with its station identifier and temperature reading
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ObservationRecord {
    /// Observation date (YYYY-MM-DD)
    pub date: String,
    /// Station identifier
    pub station: String,
    /// Observed temperature, null where the station reported none
    pub temperature: Option<f64>,
}

/// All observations as {date, precipitation} records, in storage order
pub async fn all_precipitation(conn: &mut SqliteConnection) -> Result<Vec<PrecipitationRecord>> {
    let records = sqlx::query_as::<_, PrecipitationRecord>(
        "SELECT date, prcp AS precipitation FROM measurement",
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(records)
}

/// All stations as {station_id, station_name} records
pub async fn all_stations(conn: &mut SqliteConnection) -> Result<Vec<StationRecord>> {
    let records = sqlx::query_as::<_, StationRecord>(
        "SELECT station AS station_id, name AS station_name FROM station",
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(records)
}

/// Find the station with the most observation rows.
///
/// Counts measurement rows grouped by station, joined against the station
/// table, ordered by count descending. Returns the winning station id and
/// its count, or None if there are no observations. Ties are broken by
/// whatever order SQLite emits the groups in.
pub async fn most_active_station(conn: &mut SqliteConnection) -> Result<Option<(String, i64)>> {
    let row = sqlx::query_as::<_, (String, i64)>(
        "SELECT m.station, COUNT(m.station) AS observation_count \
         FROM measurement m \
         JOIN station s ON s.station = m.station \
         GROUP BY m.station \
         ORDER BY observation_count DESC",
    )
    .fetch_optional(&mut *conn)
    .await?;

    Ok(row)
}

/// The latest recorded observation date for a station, if it has any rows
pub async fn latest_date_for_station(
    conn: &mut SqliteConnection,
    station: &str,
) -> Result<Option<String>> {
    // MAX over an empty set yields NULL
    let date: Option<String> =
        sqlx::query_scalar("SELECT MAX(date) FROM measurement WHERE station = ?1")
            .bind(station)
            .fetch_one(&mut *conn)
            .await?;

    Ok(date)
}

/// Compute the start of the 365-day window ending at the given date.
///
/// Plain calendar subtraction; no leap-year adjustment.
pub fn window_start(latest: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(latest, "%Y-%m-%d").map_err(|_| KonaError::InvalidDate {
        value: latest.to_string(),
    })?;

    Ok((date - Duration::days(365)).format("%Y-%m-%d").to_string())
}

/// Temperature observations for one station with date >= start
pub async fn temperature_window(
    conn: &mut SqliteConnection,
    station: &str,
    start: &str,
) -> Result<Vec<TemperatureRecord>> {
    let records = sqlx::query_as::<_, TemperatureRecord>(
        "SELECT date, tobs AS temperature FROM measurement \
         WHERE station = ?1 AND date >= ?2",
    )
    .bind(station)
    .bind(start)
    .fetch_all(&mut *conn)
    .await?;

    Ok(records)
}

/// All observations with date >= start
pub async fn observations_from(
    conn: &mut SqliteConnection,
    start: &str,
) -> Result<Vec<ObservationRecord>> {
    let records = sqlx::query_as::<_, ObservationRecord>(
        "SELECT date, station, tobs AS temperature FROM measurement WHERE date >= ?1",
    )
    .bind(start)
    .fetch_all(&mut *conn)
    .await?;

    Ok(records)
}

/// All observations with start <= date <= end
pub async fn observations_between(
    conn: &mut SqliteConnection,
    start: &str,
    end: &str,
) -> Result<Vec<ObservationRecord>> {
    let records = sqlx::query_as::<_, ObservationRecord>(
        "SELECT date, station, tobs AS temperature FROM measurement \
         WHERE date >= ?1 AND date <= ?2",
    )
    .bind(start)
    .bind(end)
    .fetch_all(&mut *conn)
    .await?;

    Ok(records)
}
