use axum::http::StatusCode;
use chrono::DateTime;
use chrono_tz::Tz;
use reqwest::Client;
use thiserror::Error;

use super::models::{AstronomyReport, MoonApiResponse, MoonAstro, SunApiResponse, SunResults};
use crate::cache::{astro_cache_key, AstroCache};
use crate::error::HttpError;
use crate::impl_into_response;

const SUNRISE_SUNSET_API_URL: &str = "https://api.sunrise-sunset.org/json";
const WEATHERAPI_ASTRONOMY_URL: &str = "https://api.weatherapi.com/v1/astronomy.json";

#[derive(Error, Debug)]
pub enum AstroError {
    #[error("Failed to fetch astronomical data: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl HttpError for AstroError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::RequestError(_) => StatusCode::BAD_GATEWAY,
            Self::ApiError(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::RequestError(_) => Some("REQUEST_ERROR"),
            Self::ApiError(_) => Some("API_ERROR"),
            Self::InvalidResponse(_) => Some("INVALID_RESPONSE"),
        }
    }
}

impl_into_response!(AstroError);

pub struct AstroService {
    client: Client,
    weatherapi_key: String,
    cache: AstroCache,
    tz: Tz,
}

impl AstroService {
    pub fn new(client: Client, weatherapi_key: &str, cache: AstroCache, tz: Tz) -> Self {
        Self {
            client,
            weatherapi_key: weatherapi_key.to_string(),
            cache,
            tz,
        }
    }

    /// Sun and moon data for a location, for today in the station timezone.
    /// Responses are cached per (coordinates, local date).
    pub async fn get_astronomy(&self, lat: f64, lon: f64) -> Result<AstronomyReport, AstroError> {
        let date = chrono::Utc::now()
            .with_timezone(&self.tz)
            .format("%Y-%m-%d")
            .to_string();
        let cache_key = astro_cache_key(lat, lon, &date);

        if let Some(cached) = self.cache.get(&cache_key) {
            return Ok(cached);
        }

        tracing::debug!(lat, lon, date = %date, "Fetching astronomical data");

        let (sun, moon) = tokio::try_join!(self.fetch_sun(lat, lon), self.fetch_moon(lat, lon))?;

        let report = self.build_report(sun, moon)?;
        self.cache.insert(cache_key, report.clone());

        Ok(report)
    }

    async fn fetch_sun(&self, lat: f64, lon: f64) -> Result<SunResults, AstroError> {
        let response = self
            .client
            .get(SUNRISE_SUNSET_API_URL)
            .query(&[
                ("lat", lat.to_string()),
                ("lng", lon.to_string()),
                ("date", "today".to_string()),
                ("tzid", self.tz.name().to_string()),
                ("formatted", "0".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AstroError::ApiError(format!("Sunrise lookup failed: {}", text)));
        }

        let body: SunApiResponse = response.json().await?;
        if body.status != "OK" {
            return Err(AstroError::ApiError(format!(
                "Sunrise API returned status {}",
                body.status
            )));
        }

        Ok(body.results)
    }

    async fn fetch_moon(&self, lat: f64, lon: f64) -> Result<MoonAstro, AstroError> {
        let coords = format!("{},{}", lat, lon);
        let response = self
            .client
            .get(WEATHERAPI_ASTRONOMY_URL)
            .query(&[
                ("key", self.weatherapi_key.as_str()),
                ("q", coords.as_str()),
                ("dt", "today"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AstroError::ApiError(format!("Moon lookup failed: {}", text)));
        }

        let body: MoonApiResponse = response.json().await?;
        Ok(body.astronomy.astro)
    }

    fn build_report(&self, sun: SunResults, moon: MoonAstro) -> Result<AstronomyReport, AstroError> {
        Ok(AstronomyReport {
            sunrise: self.format_local_time(&sun.sunrise)?,
            sunset: self.format_local_time(&sun.sunset)?,
            solar_noon: self.format_local_time(&sun.solar_noon)?,
            day_length: format_day_length(sun.day_length),
            astronomical_twilight_begin: self.format_local_time(&sun.astronomical_twilight_begin)?,
            astronomical_twilight_end: self.format_local_time(&sun.astronomical_twilight_end)?,
            moon_phase_icon: moon_phase_icon(&moon.moon_phase),
            moon_illumination: moon.moon_illumination.as_percent(),
            moon_phase: moon.moon_phase,
        })
    }

    fn format_local_time(&self, iso: &str) -> Result<String, AstroError> {
        let parsed = DateTime::parse_from_rfc3339(iso).map_err(|e| {
            AstroError::InvalidResponse(format!("bad timestamp '{}': {}", iso, e))
        })?;
        Ok(parsed.with_timezone(&self.tz).format("%H:%M").to_string())
    }
}

/// Seconds of daylight as "Xh Ym"
fn format_day_length(seconds: i64) -> String {
    format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
}

/// Kebab-case icon key for a moon phase name
fn moon_phase_icon(phase: &str) -> String {
    phase.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astro::models::MoonIllumination;
    use crate::cache::create_astro_cache;
    use chrono_tz::Asia::Jakarta;

    fn service() -> AstroService {
        AstroService::new(Client::new(), "test-key", create_astro_cache(), Jakarta)
    }

    #[test]
    fn test_format_day_length() {
        assert_eq!(format_day_length(12 * 3600 + 7 * 60), "12h 7m");
        assert_eq!(format_day_length(0), "0h 0m");
    }

    #[test]
    fn test_moon_phase_icon() {
        assert_eq!(moon_phase_icon("Waning Gibbous"), "waning-gibbous");
        assert_eq!(moon_phase_icon("Full Moon"), "full-moon");
    }

    #[test]
    fn test_format_local_time_converts_to_station_tz() {
        let svc = service();
        // 22:45 UTC is 05:45 the next day in Jakarta (UTC+7)
        let formatted = svc.format_local_time("2025-08-29T22:45:00+00:00").unwrap();
        assert_eq!(formatted, "05:45");
    }

    #[test]
    fn test_format_local_time_rejects_garbage() {
        let svc = service();
        assert!(svc.format_local_time("5:45 AM").is_err());
    }

    #[test]
    fn test_build_report() {
        let svc = service();
        let sun = SunResults {
            sunrise: "2025-08-30T05:58:00+07:00".to_string(),
            sunset: "2025-08-30T17:52:00+07:00".to_string(),
            solar_noon: "2025-08-30T11:55:00+07:00".to_string(),
            day_length: 12 * 3600 + 7 * 60,
            astronomical_twilight_begin: "2025-08-30T04:40:00+07:00".to_string(),
            astronomical_twilight_end: "2025-08-30T19:10:00+07:00".to_string(),
        };
        let moon = MoonAstro {
            moon_phase: "Waxing Crescent".to_string(),
            moon_illumination: MoonIllumination::Text("42".to_string()),
        };

        let report = svc.build_report(sun, moon).unwrap();
        assert_eq!(report.sunrise, "05:58");
        assert_eq!(report.sunset, "17:52");
        assert_eq!(report.day_length, "12h 7m");
        assert_eq!(report.moon_phase_icon, "waxing-crescent");
        assert_eq!(report.moon_illumination, 42);
    }
}
