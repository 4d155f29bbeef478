use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use super::accumulator::{compute_daily_rainfall, DailyRainfallSummary};
use crate::extractors::SensorParam;
use crate::AppState;

/// Readings fetched around "today": wide enough that the local calendar
/// day is fully covered regardless of the UTC offset
const FETCH_WINDOW_SECS: i64 = 2 * 24 * 3600;

#[derive(Debug, Serialize, ToSchema)]
pub struct DailyRainfallResponse {
    pub sensor: String,
    /// Local calendar date the summary covers, YYYY-MM-DD
    pub date: String,
    pub summary: DailyRainfallSummary,
}

/// Daily rainfall summary for a sensor
///
/// GET /rainfall/{sensor}/daily
///
/// An unknown sensor or a day without readings yields the zero summary
/// rather than an error.
pub async fn get_daily_rainfall(
    State(state): State<AppState>,
    sensor: SensorParam,
) -> Json<DailyRainfallResponse> {
    let sensor = sensor.or_default(state.config.default_sensor.as_str());

    let now = chrono::Utc::now().with_timezone(&state.tz);
    let readings = state
        .store
        .range(&sensor, now.timestamp() - FETCH_WINDOW_SECS, now.timestamp())
        .await;

    let summary = compute_daily_rainfall(&readings, now);

    tracing::debug!(
        sensor = %sensor,
        readings = readings.len(),
        total = summary.total,
        periods = summary.periods.len(),
        "Computed daily rainfall"
    );

    Json(DailyRainfallResponse {
        sensor,
        date: now.format("%Y-%m-%d").to_string(),
        summary,
    })
}
