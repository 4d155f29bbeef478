use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::models::AstronomyReport;
use super::service::AstroError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AstronomyQuery {
    /// Latitude override; defaults to the configured station coordinates
    pub lat: Option<f64>,
    /// Longitude override
    pub lng: Option<f64>,
}

/// Sun and moon data for today
///
/// GET /astronomy?lat=-6.2&lng=106.8
pub async fn get_astronomy(
    State(state): State<AppState>,
    Query(query): Query<AstronomyQuery>,
) -> Result<Json<AstronomyReport>, AstroError> {
    let lat = query.lat.unwrap_or(state.config.latitude);
    let lng = query.lng.unwrap_or(state.config.longitude);

    let report = state.astro_service.get_astronomy(lat, lng).await?;
    Ok(Json(report))
}
