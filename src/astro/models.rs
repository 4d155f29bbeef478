use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// API Response Models (External - what we return to clients)
// ============================================================================

/// Combined sun and moon data for one location and local date
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AstronomyReport {
    /// Local times, HH:MM
    pub sunrise: String,
    pub sunset: String,
    pub solar_noon: String,
    /// Formatted day length, e.g. "12h 7m"
    pub day_length: String,
    pub astronomical_twilight_begin: String,
    pub astronomical_twilight_end: String,
    pub moon_phase: String,
    /// Kebab-case icon key derived from the phase name
    pub moon_phase_icon: String,
    /// Illuminated fraction, percent
    pub moon_illumination: u32,
}

// ============================================================================
// Upstream responses (internal deserialization)
// ============================================================================

/// Raw response from api.sunrise-sunset.org (formatted=0: ISO-8601 times)
#[derive(Debug, Deserialize)]
pub struct SunApiResponse {
    pub results: SunResults,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct SunResults {
    pub sunrise: String,
    pub sunset: String,
    pub solar_noon: String,
    /// Seconds of daylight
    pub day_length: i64,
    pub astronomical_twilight_begin: String,
    pub astronomical_twilight_end: String,
}

/// Raw response from the WeatherAPI astronomy endpoint
#[derive(Debug, Deserialize)]
pub struct MoonApiResponse {
    pub astronomy: MoonAstronomy,
}

#[derive(Debug, Deserialize)]
pub struct MoonAstronomy {
    pub astro: MoonAstro,
}

#[derive(Debug, Deserialize)]
pub struct MoonAstro {
    pub moon_phase: String,
    pub moon_illumination: MoonIllumination,
}

/// WeatherAPI has shipped the illumination both as a string and as a
/// number depending on API version
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MoonIllumination {
    Number(f64),
    Text(String),
}

impl MoonIllumination {
    /// Illumination as an integer percentage; unparseable text becomes 0
    pub fn as_percent(&self) -> u32 {
        match self {
            Self::Number(n) => n.round().max(0.0) as u32,
            Self::Text(s) => s.trim().parse().unwrap_or(0),
        }
    }
}
