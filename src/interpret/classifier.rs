use serde::Serialize;
use utoipa::ToSchema;

/// A discrete weather condition with its display hints.
///
/// `icon` and `color` are opaque presentation keys consumed by the
/// dashboard; the service never interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct WeatherCondition {
    pub condition: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Map a (temperature °C, humidity %, pressure hPa) triple to a weather
/// condition.
///
/// Rules are evaluated top to bottom and the first match wins; the rules
/// are not mutually exclusive, so the order is part of the contract. The
/// final branch is an explicit default, so this never fails. Out-of-range
/// values are classified mechanically; validation belongs to the caller.
pub fn interpret_weather(temperature: f64, humidity: f64, pressure: f64) -> WeatherCondition {
    // Extreme heat conditions
    if temperature >= 34.0 && humidity >= 60.0 {
        return WeatherCondition {
            condition: "Tropical Heatwave",
            description: "Extremely hot and humid conditions. Stay hydrated and avoid prolonged outdoor activities.",
            icon: "sun",
            color: "text-red-500",
        };
    }

    // Heavy rain conditions
    if humidity > 90.0 && pressure < 1000.0 {
        return WeatherCondition {
            condition: "Heavy Rain",
            description: "High humidity and low pressure indicate heavy rainfall. Be cautious of potential flooding.",
            icon: "cloud-rain",
            color: "text-blue-700",
        };
    }

    // Thunderstorm conditions
    if humidity > 85.0 && pressure < 1003.0 && temperature >= 25.0 {
        return WeatherCondition {
            condition: "Thunderstorm",
            description: "High humidity and low pressure with warm temperatures suggest thunderstorms. Stay indoors.",
            icon: "cloud-lightning",
            color: "text-purple-600",
        };
    }

    // High humidity with moderate temperature
    if (28.0..=32.0).contains(&temperature) && humidity > 80.0 {
        return WeatherCondition {
            condition: "Humid and Warm",
            description: "High humidity with warm temperatures. Stay cool and hydrated.",
            icon: "thermometer-sun",
            color: "text-orange-500",
        };
    }

    // Cool and rainy
    if temperature < 25.0 && humidity > 85.0 {
        return WeatherCondition {
            condition: "Cool and Rainy",
            description: "Cool temperatures with high humidity and possible rain. Carry an umbrella.",
            icon: "cloud-drizzle",
            color: "text-indigo-500",
        };
    }

    // Stable tropical weather
    if pressure > 1010.0 && humidity <= 70.0 && (26.0..=30.0).contains(&temperature) {
        return WeatherCondition {
            condition: "Stable Tropical Weather",
            description: "Pleasant tropical weather with stable pressure and moderate humidity.",
            icon: "cloud-sun",
            color: "text-green-500",
        };
    }

    // Hot and dry (rare in tropical climates)
    if temperature > 34.0 && humidity < 50.0 {
        return WeatherCondition {
            condition: "Hot and Dry",
            description: "Unusually hot and dry conditions for a tropical climate. Stay hydrated.",
            icon: "sun",
            color: "text-yellow-600",
        };
    }

    // Monsoon-like conditions
    if humidity > 90.0 && temperature >= 25.0 && pressure < 1005.0 {
        return WeatherCondition {
            condition: "Monsoon",
            description: "High humidity and warm temperatures with low pressure indicate monsoon conditions.",
            icon: "cloud-rain",
            color: "text-blue-600",
        };
    }

    // Foggy conditions
    if humidity > 95.0 && temperature < 24.0 {
        return WeatherCondition {
            condition: "Foggy",
            description: "High humidity and cool temperatures causing fog. Visibility may be reduced.",
            icon: "cloud-fog",
            color: "text-gray-500",
        };
    }

    // Default - tropical moderate conditions
    WeatherCondition {
        condition: "Tropical Moderate",
        description: "Typical tropical weather with moderate temperature and humidity.",
        icon: "cloud",
        color: "text-green-400",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heatwave_matches_first() {
        // Rule 1 wins even though later rules could also be evaluated
        let condition = interpret_weather(35.0, 65.0, 1005.0);
        assert_eq!(condition.condition, "Tropical Heatwave");
        assert_eq!(condition.icon, "sun");
    }

    #[test]
    fn test_heavy_rain() {
        let condition = interpret_weather(26.0, 95.0, 995.0);
        assert_eq!(condition.condition, "Heavy Rain");
    }

    #[test]
    fn test_thunderstorm() {
        // Humidity 88 clears the thunderstorm bar but not the heavy-rain one
        let condition = interpret_weather(30.0, 88.0, 1001.0);
        assert_eq!(condition.condition, "Thunderstorm");
    }

    #[test]
    fn test_humid_and_warm() {
        let condition = interpret_weather(29.0, 85.0, 1010.0);
        assert_eq!(condition.condition, "Humid and Warm");
    }

    #[test]
    fn test_cool_and_rainy() {
        let condition = interpret_weather(20.0, 90.0, 1008.0);
        assert_eq!(condition.condition, "Cool and Rainy");
    }

    #[test]
    fn test_stable_tropical() {
        let condition = interpret_weather(27.0, 60.0, 1015.0);
        assert_eq!(condition.condition, "Stable Tropical Weather");
    }

    #[test]
    fn test_hot_and_dry() {
        let condition = interpret_weather(36.0, 40.0, 1008.0);
        assert_eq!(condition.condition, "Hot and Dry");
    }

    #[test]
    fn test_monsoon() {
        // Pressure 1004 dodges heavy rain (>= 1000) and thunderstorm (< 1003)
        let condition = interpret_weather(26.0, 92.0, 1004.0);
        assert_eq!(condition.condition, "Monsoon");
    }

    #[test]
    fn test_cool_and_rainy_shadows_foggy() {
        // The foggy rule is a strict subset of cool-and-rainy, which sits
        // earlier in the table; precedence keeps it that way
        let condition = interpret_weather(23.0, 96.0, 1010.0);
        assert_eq!(condition.condition, "Cool and Rainy");
    }

    #[test]
    fn test_default_falls_through_every_rule() {
        let condition = interpret_weather(27.0, 50.0, 1012.0);
        assert_eq!(condition.condition, "Tropical Moderate");
        assert_eq!(condition.color, "text-green-400");
    }

    #[test]
    fn test_out_of_range_input_still_classifies() {
        let condition = interpret_weather(40.0, 120.0, 990.0);
        assert_eq!(condition.condition, "Tropical Heatwave");
    }
}
