use axum::{
    extract::{FromRequestParts, Path, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::ErrorResponse;

/// Query parameters carrying an optional sensor id
#[derive(Debug, Deserialize)]
struct SensorQuery {
    sensor: Option<String>,
}

/// Extracts a sensor id from either the path or the query string
///
/// Checks the path first, then falls back to `?sensor=`. Handlers fall
/// back to the configured default sensor when neither is present.
#[derive(Debug)]
pub struct SensorParam(pub Option<String>);

impl SensorParam {
    /// Get the sensor id or use a default
    pub fn or_default(self, default: impl Into<String>) -> String {
        self.0.unwrap_or_else(|| default.into())
    }
}

impl<S> FromRequestParts<S> for SensorParam
where
    S: Send + Sync,
{
    type Rejection = SensorParamRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Try to extract the sensor id from the path first
        if let Ok(Path(sensor)) = Path::<String>::from_request_parts(parts, state).await {
            if !sensor.is_empty() {
                return Ok(SensorParam(Some(sensor)));
            }
        }

        // Fall back to the query parameter
        if let Ok(Query(query)) = Query::<SensorQuery>::from_request_parts(parts, state).await {
            return Ok(SensorParam(query.sensor));
        }

        // No sensor named - the handler can use the configured default
        Ok(SensorParam(None))
    }
}

/// Rejection type for sensor parameter extraction failures
#[derive(Debug)]
pub struct SensorParamRejection(pub String);

impl IntoResponse for SensorParamRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(self.0))).into_response()
    }
}
