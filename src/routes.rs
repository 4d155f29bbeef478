use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};

use crate::astro::handlers as astro_handlers;
use crate::interpret::handlers as interpret_handlers;
use crate::middleware::{require_api_key, IngestApiKey};
use crate::openapi::swagger_ui;
use crate::rainfall::handlers as rainfall_handlers;
use crate::station::handlers as station_handlers;
use crate::AppState;

/// Build the ingest route (protected by API key auth when configured)
fn ingest_routes(api_key: Option<String>) -> Router<AppState> {
    Router::new()
        .route("/ingest/{sensor}", post(station_handlers::ingest_readings))
        // Extension must sit outside the auth middleware so the key is
        // present when the request reaches it
        .layer(middleware::from_fn(require_api_key))
        .layer(Extension(IngestApiKey(api_key)))
}

/// Build the readings API routes
fn readings_routes() -> Router<AppState> {
    Router::new()
        .route("/readings", get(station_handlers::list_readings))
        .route("/readings/latest", get(station_handlers::get_latest_reading))
        .route("/readings/{sensor}", get(station_handlers::list_readings))
        .route(
            "/readings/{sensor}/latest",
            get(station_handlers::get_latest_reading),
        )
}

/// Build the rainfall API routes
fn rainfall_routes() -> Router<AppState> {
    Router::new()
        .route("/rainfall/daily", get(rainfall_handlers::get_daily_rainfall))
        .route(
            "/rainfall/{sensor}/daily",
            get(rainfall_handlers::get_daily_rainfall),
        )
}

/// Build the interpretation API routes
fn interpretation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/interpretation",
            get(interpret_handlers::get_interpretation),
        )
        .route(
            "/interpretation/classify",
            get(interpret_handlers::classify),
        )
        .route(
            "/interpretation/{sensor}",
            get(interpret_handlers::get_interpretation),
        )
}

/// Build the astronomy API routes
fn astronomy_routes() -> Router<AppState> {
    Router::new().route("/astronomy", get(astro_handlers::get_astronomy))
}

/// Build all API v1 routes
pub fn api_v1_routes(ingest_api_key: Option<String>) -> Router<AppState> {
    Router::new()
        .merge(readings_routes())
        .merge(rainfall_routes())
        .merge(interpretation_routes())
        .merge(astronomy_routes())
        .merge(ingest_routes(ingest_api_key))
}

/// Build the complete application router
pub fn build_router(state: AppState) -> Router {
    let ingest_api_key = state.config.ingest_api_key.clone();
    Router::new()
        // Health check at root level
        .route("/", get(health))
        .route("/health", get(health))
        // API v1 routes
        .nest("/api/v1", api_v1_routes(ingest_api_key))
        // Swagger UI for API documentation
        .merge(swagger_ui())
        .with_state(state)
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health() -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
