use chrono_tz::Tz;
use config::{Case, Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// IANA timezone the station reports in; drives "today" for the
    /// rainfall summary and astronomy lookups
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Station latitude (astronomy default)
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    /// Station longitude (astronomy default)
    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// Sensor id used when a request does not name one
    #[serde(default = "default_sensor")]
    pub default_sensor: String,

    /// How many minutes of readings to keep in memory
    #[serde(default = "default_retention_minutes")]
    pub retention_minutes: i64,

    /// API key for the ingest endpoint (optional - if not set, no auth required)
    #[serde(default)]
    pub ingest_api_key: Option<String>,

    /// WeatherAPI.com key for moon phase data
    pub weatherapi_key: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_timezone() -> String {
    "Asia/Jakarta".to_string()
}

fn default_latitude() -> f64 {
    -6.2
}

fn default_longitude() -> f64 {
    106.8167
}

fn default_sensor() -> String {
    "id-03".to_string()
}

fn default_retention_minutes() -> i64 {
    2880
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Start with default values
            .set_default("host", default_host())?
            .set_default("port", default_port())?
            .set_default("timezone", default_timezone())?
            .set_default("default_sensor", default_sensor())?
            // Load from config file if present
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config.local").required(false))
            // Override with environment variables (prefixed with STATIONWX_)
            // Convert SCREAMING_SNAKE_CASE env vars to snake_case config keys
            .add_source(
                Environment::with_prefix("STATIONWX")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(Case::Snake)
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Parse the configured timezone string
    pub fn station_tz(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| ConfigError::Message(format!("invalid timezone '{}': {}", self.timezone, e)))
    }
}
