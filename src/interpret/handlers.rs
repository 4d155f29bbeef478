use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::activities::activity_recommendations;
use super::classifier::{interpret_weather, WeatherCondition};
use super::comfort::{humidex, humidex_comfort, HumidexComfort};
use crate::error::HttpError;
use crate::extractors::SensorParam;
use crate::impl_into_response;
use crate::AppState;

#[derive(Error, Debug)]
pub enum InterpretError {
    #[error("No readings for sensor: {0}")]
    NoData(String),
}

impl HttpError for InterpretError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NoData(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::NoData(_) => Some("SENSOR_NOT_FOUND"),
        }
    }
}

impl_into_response!(InterpretError);

/// Interpretation of one (temperature, humidity, pressure) triple
#[derive(Debug, Serialize, ToSchema)]
pub struct InterpretationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor: Option<String>,
    /// Epoch seconds of the reading, absent for ad-hoc classification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub condition: WeatherCondition,
    pub humidex: f64,
    pub comfort: HumidexComfort,
    pub recommendations: Vec<&'static str>,
}

/// Parameters for ad-hoc classification
#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

fn interpret(temperature: f64, humidity: f64, pressure: f64) -> InterpretationResponse {
    let value = humidex(temperature, humidity);
    InterpretationResponse {
        sensor: None,
        timestamp: None,
        temperature,
        humidity,
        pressure,
        condition: interpret_weather(temperature, humidity, pressure),
        humidex: value,
        comfort: humidex_comfort(value),
        recommendations: activity_recommendations(temperature, humidity, pressure),
    }
}

/// Interpret the newest reading of a sensor
///
/// GET /interpretation/{sensor}
pub async fn get_interpretation(
    State(state): State<AppState>,
    sensor: SensorParam,
) -> Result<Json<InterpretationResponse>, InterpretError> {
    let sensor = sensor.or_default(state.config.default_sensor.as_str());

    let reading = state
        .store
        .latest(&sensor)
        .await
        .ok_or_else(|| InterpretError::NoData(sensor.clone()))?;

    let mut response = interpret(reading.temperature, reading.humidity, reading.pressure);
    response.sensor = Some(sensor);
    response.timestamp = Some(reading.timestamp);

    Ok(Json(response))
}

/// Classify an explicit triple without touching stored readings
///
/// GET /interpretation/classify?temperature=27&humidity=50&pressure=1012
pub async fn classify(Query(query): Query<ClassifyQuery>) -> Json<InterpretationResponse> {
    Json(interpret(query.temperature, query.humidity, query.pressure))
}
