//! Temperature observations endpoint handler.
//!
//! Returns {date, temperature} records for the single most-observed
//! station, restricted to the 365 days preceding (inclusive) that
//! station's latest recorded date.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::handle_query_error;
use crate::error::KonaError;
use crate::logging::generate_request_id;
use crate::queries;
use crate::state::AppState;

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(
        endpoint = "/api/v1.0/tobs",
        request_id = %request_id,
        "Processing temperature observations request"
    );

    let result = async {
        let mut conn = state.pool.acquire().await?;

        let (station, observation_count) = queries::most_active_station(&mut conn)
            .await?
            .ok_or_else(|| KonaError::DataNotFound {
                message: "No observations in dataset".to_string(),
            })?;

        let latest = queries::latest_date_for_station(&mut conn, &station)
            .await?
            .ok_or_else(|| KonaError::DataNotFound {
                message: format!("No observations for station {}", station),
            })?;

        let cutoff = queries::window_start(&latest)?;

        debug!(
            endpoint = "/api/v1.0/tobs",
            request_id = %request_id,
            station = %station,
            observation_count,
            latest_date = %latest,
            cutoff = %cutoff,
            "Resolved most active station"
        );

        queries::temperature_window(&mut conn, &station, &cutoff).await
    }
    .await;

    match result {
        Ok(records) => {
            let duration = start_time.elapsed();
            info!(
                endpoint = "/api/v1.0/tobs",
                request_id = %request_id,
                duration_us = duration.as_micros() as u64,
                record_count = records.len(),
                "Temperature observations request successful"
            );

            Json(records).into_response()
        }
        Err(error) => handle_query_error(error, "/api/v1.0/tobs", &request_id, None),
    }
}
