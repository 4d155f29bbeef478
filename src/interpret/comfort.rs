use serde::Serialize;
use utoipa::ToSchema;

/// Humidex comfort band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct HumidexComfort {
    pub level: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

/// Calculate the Humidex (Canadian humidity index): perceived temperature
/// combining heat and humidity. Dew point via the Magnus approximation,
/// result rounded to 1 decimal.
pub fn humidex(temperature: f64, humidity: f64) -> f64 {
    let a = 17.27;
    let b = 237.7;
    let alpha = (a * temperature) / (b + temperature) + (humidity / 100.0).ln();
    let dew_point = (b * alpha) / (a - alpha);

    let vapor_pressure = 6.11 * (5417.753 * (1.0 / 273.16 - 1.0 / (dew_point + 273.16))).exp();
    let humidex = temperature + 0.5555 * (vapor_pressure - 10.0);

    (humidex * 10.0).round() / 10.0
}

/// Map a humidex value to its comfort band
pub fn humidex_comfort(humidex: f64) -> HumidexComfort {
    if humidex < 29.0 {
        HumidexComfort {
            level: "Comfortable",
            description: "Little to no discomfort",
            color: "text-green-500",
        }
    } else if humidex < 35.0 {
        HumidexComfort {
            level: "Noticeable Discomfort",
            description: "Some discomfort, especially during physical activity",
            color: "text-yellow-500",
        }
    } else if humidex < 40.0 {
        HumidexComfort {
            level: "Evident Discomfort",
            description: "Evident discomfort; limit intense physical activity",
            color: "text-orange-500",
        }
    } else if humidex < 45.0 {
        HumidexComfort {
            level: "Intense Discomfort",
            description: "Intense discomfort; avoid exertion",
            color: "text-red-500",
        }
    } else if humidex < 54.0 {
        HumidexComfort {
            level: "Dangerous",
            description: "Dangerous levels of discomfort; avoid outdoor activities",
            color: "text-red-600",
        }
    } else {
        HumidexComfort {
            level: "Heat Stroke Risk",
            description: "Heat stroke imminent; seek cool environment immediately",
            color: "text-purple-600",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humidex_exceeds_temperature_when_humid() {
        let value = humidex(30.0, 70.0);
        assert!(value > 30.0);
    }

    #[test]
    fn test_humidex_grows_with_humidity() {
        assert!(humidex(30.0, 80.0) > humidex(30.0, 50.0));
    }

    #[test]
    fn test_humidex_near_dry_air_tracks_temperature() {
        // At low humidity the vapor-pressure term shrinks toward zero
        let value = humidex(25.0, 20.0);
        assert!(value < 25.0);
    }

    #[test]
    fn test_humidex_is_rounded_to_one_decimal() {
        let value = humidex(31.0, 72.0);
        assert_eq!(value, (value * 10.0).round() / 10.0);
    }

    #[test]
    fn test_comfort_bands() {
        assert_eq!(humidex_comfort(25.0).level, "Comfortable");
        assert_eq!(humidex_comfort(29.0).level, "Noticeable Discomfort");
        assert_eq!(humidex_comfort(34.9).level, "Noticeable Discomfort");
        assert_eq!(humidex_comfort(35.0).level, "Evident Discomfort");
        assert_eq!(humidex_comfort(40.0).level, "Intense Discomfort");
        assert_eq!(humidex_comfort(45.0).level, "Dangerous");
        assert_eq!(humidex_comfort(54.0).level, "Heat Stroke Risk");
    }
}
