use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One reading from the station at one instant.
///
/// Field names match the station firmware payload. Every numeric field
/// except the timestamp defaults to 0 when absent, so older firmware
/// without the rain/wind/light sensors still ingests cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SensorSample {
    /// Seconds since epoch; ordering and dedup key
    pub timestamp: i64,
    /// Air temperature, degrees Celsius
    #[serde(default)]
    pub temperature: f64,
    /// Relative humidity, percent
    #[serde(default)]
    pub humidity: f64,
    /// Barometric pressure, hPa
    #[serde(default)]
    pub pressure: f64,
    /// Dew point, degrees Celsius
    #[serde(default)]
    pub dew: f64,
    /// Battery voltage
    #[serde(default)]
    pub volt: f64,
    /// Tipping-bucket reading, mm
    #[serde(default)]
    pub rainfall: f64,
    /// Instantaneous rain rate, mm/h
    #[serde(default)]
    pub rainrate: f64,
    /// Sunlight intensity, lux
    #[serde(default)]
    pub sunlight: f64,
    /// Wind speed, km/h
    #[serde(default)]
    pub windspeed: f64,
    /// Wind direction, degrees
    #[serde(default)]
    pub windir: f64,
}

/// Result of an ingest call
#[derive(Debug, Serialize, ToSchema)]
pub struct IngestResponse {
    pub sensor: String,
    pub received: usize,
    /// Readings actually stored (duplicates by timestamp are dropped)
    pub stored: usize,
}

/// A window of readings for one sensor
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadingsResponse {
    pub sensor: String,
    /// Window length in minutes, ending at the time of the request
    pub minutes: i64,
    pub count: usize,
    pub readings: Vec<SensorSample>,
}

/// The newest reading plus human-readable scale labels
#[derive(Debug, Serialize, ToSchema)]
pub struct LatestReadingResponse {
    pub sensor: String,
    pub reading: SensorSample,
    /// Beaufort-scale wind description
    pub wind_description: &'static str,
    /// Sunlight intensity category
    pub sunlight_category: &'static str,
    /// Instantaneous rain-rate category
    pub rain_rate_category: &'static str,
}

/// Query parameters for the readings window endpoint
#[derive(Debug, Deserialize)]
pub struct ReadingsQuery {
    /// Sensor id from query string
    pub sensor: Option<String>,
    /// Window length in minutes (default 60)
    pub minutes: Option<i64>,
}
