use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use thiserror::Error;

use super::models::{
    IngestResponse, LatestReadingResponse, ReadingsQuery, ReadingsResponse, SensorSample,
};
use crate::error::HttpError;
use crate::extractors::SensorParam;
use crate::impl_into_response;
use crate::interpret::scales;
use crate::AppState;

const DEFAULT_WINDOW_MINUTES: i64 = 60;

#[derive(Error, Debug)]
pub enum StationError {
    #[error("No readings for sensor: {0}")]
    SensorNotFound(String),

    #[error("Reading batch is empty")]
    EmptyBatch,
}

impl HttpError for StationError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::SensorNotFound(_) => StatusCode::NOT_FOUND,
            Self::EmptyBatch => StatusCode::BAD_REQUEST,
        }
    }

    fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::SensorNotFound(_) => Some("SENSOR_NOT_FOUND"),
            Self::EmptyBatch => Some("EMPTY_BATCH"),
        }
    }
}

impl_into_response!(StationError);

/// Ingest a batch of readings for a sensor
///
/// POST /ingest/{sensor}
pub async fn ingest_readings(
    State(state): State<AppState>,
    SensorParam(sensor): SensorParam,
    Json(readings): Json<Vec<SensorSample>>,
) -> Result<Json<IngestResponse>, StationError> {
    let sensor = sensor.unwrap_or_else(|| state.config.default_sensor.clone());

    if readings.is_empty() {
        return Err(StationError::EmptyBatch);
    }

    let received = readings.len();
    let stored = state.store.insert_batch(&sensor, readings).await;

    tracing::debug!(sensor = %sensor, received, stored, "Ingested reading batch");

    Ok(Json(IngestResponse {
        sensor,
        received,
        stored,
    }))
}

/// Get the reading window for a sensor
///
/// GET /readings/{sensor}?minutes=60
pub async fn list_readings(
    State(state): State<AppState>,
    sensor: SensorParam,
    Query(query): Query<ReadingsQuery>,
) -> Result<Json<ReadingsResponse>, StationError> {
    let sensor = sensor.or_default(state.config.default_sensor.as_str());
    let minutes = query.minutes.unwrap_or(DEFAULT_WINDOW_MINUTES).max(1);

    let now = chrono::Utc::now().timestamp();
    let readings = state.store.range(&sensor, now - minutes * 60, now).await;

    Ok(Json(ReadingsResponse {
        sensor,
        minutes,
        count: readings.len(),
        readings,
    }))
}

/// Get the newest reading for a sensor, with derived scale labels
///
/// GET /readings/{sensor}/latest
pub async fn get_latest_reading(
    State(state): State<AppState>,
    sensor: SensorParam,
) -> Result<Json<LatestReadingResponse>, StationError> {
    let sensor = sensor.or_default(state.config.default_sensor.as_str());

    let reading = state
        .store
        .latest(&sensor)
        .await
        .ok_or_else(|| StationError::SensorNotFound(sensor.clone()))?;

    let response = LatestReadingResponse {
        sensor,
        wind_description: scales::wind_description(reading.windspeed),
        sunlight_category: scales::sunlight_category(reading.sunlight),
        rain_rate_category: scales::rain_rate_category(reading.rainrate),
        reading,
    };

    Ok(Json(response))
}
