//! Human-readable labels for raw sensor magnitudes.

/// Beaufort-scale wind description for a speed in km/h
pub fn wind_description(speed: f64) -> &'static str {
    if speed < 1.0 {
        "Calm"
    } else if speed < 6.0 {
        "Light Air"
    } else if speed < 12.0 {
        "Light Breeze"
    } else if speed < 20.0 {
        "Gentle Breeze"
    } else if speed < 29.0 {
        "Moderate Breeze"
    } else if speed < 39.0 {
        "Fresh Breeze"
    } else if speed < 50.0 {
        "Strong Breeze"
    } else if speed < 62.0 {
        "Near Gale"
    } else if speed < 75.0 {
        "Gale"
    } else if speed < 89.0 {
        "Strong Gale"
    } else if speed < 103.0 {
        "Storm"
    } else if speed < 118.0 {
        "Violent Storm"
    } else {
        "Hurricane"
    }
}

/// Sunlight intensity category for a reading in lux
pub fn sunlight_category(intensity: f64) -> &'static str {
    if intensity < 1000.0 {
        "Low"
    } else if intensity < 20000.0 {
        "Moderate"
    } else if intensity < 50000.0 {
        "High"
    } else {
        "Very High"
    }
}

/// Instantaneous rain-rate category for a rate in mm/h.
/// Bands differ from the daily intensity classes: this one grades how hard
/// it is raining right now, not the day's peak.
pub fn rain_rate_category(rate: f64) -> &'static str {
    if rate == 0.0 {
        "None"
    } else if rate < 0.5 {
        "Light"
    } else if rate < 4.0 {
        "Moderate"
    } else if rate < 8.0 {
        "Heavy"
    } else {
        "Extreme"
    }
}
