use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::astro::models::AstronomyReport;
use crate::error::ErrorResponse;
use crate::interpret::classifier::WeatherCondition;
use crate::interpret::comfort::HumidexComfort;
use crate::interpret::handlers::InterpretationResponse;
use crate::rainfall::accumulator::{DailyRainfallSummary, RainIntensity, RainPeriod};
use crate::rainfall::handlers::DailyRainfallResponse;
use crate::station::models::{
    IngestResponse, LatestReadingResponse, ReadingsResponse, SensorSample,
};

/// OpenAPI documentation for the Stationwx API
///
/// This provides basic schema documentation. Full path annotations
/// can be added incrementally to handlers as needed.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stationwx API",
        version = "1.0.0",
        description = "Weather station telemetry API: sensor reading ingest, daily rainfall analytics, rule-based weather interpretation, and astronomical data.",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    tags(
        (name = "readings", description = "Sensor reading ingest and windows"),
        (name = "rainfall", description = "Daily rainfall accumulation and periods"),
        (name = "interpretation", description = "Rule-based weather interpretation"),
        (name = "astronomy", description = "Sunrise/sunset and moon phase data")
    ),
    components(
        schemas(
            ErrorResponse,
            SensorSample,
            IngestResponse,
            ReadingsResponse,
            LatestReadingResponse,
            DailyRainfallResponse,
            DailyRainfallSummary,
            RainPeriod,
            RainIntensity,
            WeatherCondition,
            HumidexComfort,
            InterpretationResponse,
            AstronomyReport,
        )
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
