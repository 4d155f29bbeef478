/// Activity recommendations for the current conditions.
///
/// Unlike the condition classifier, these rules are independent: every
/// rule that matches contributes, in table order. Returns an empty list
/// when nothing fits.
pub fn activity_recommendations(temperature: f64, humidity: f64, pressure: f64) -> Vec<&'static str> {
    let mut recommendations = Vec::new();

    // Outdoor exercise
    if (20.0..=25.0).contains(&temperature) && (40.0..=80.0).contains(&humidity) {
        recommendations.push("Good conditions for outdoor exercise");
    }

    // Drying clothes
    if temperature > 28.0 && humidity <= 80.0 {
        recommendations.push("Favorable for drying clothes outdoors");
    }

    // Plant watering
    if temperature > 25.0 && humidity <= 70.0 {
        recommendations.push("Plants may need extra watering");
    }

    // Air conditioning
    if temperature > 28.0 || (temperature > 24.0 && humidity > 70.0) {
        recommendations.push("Consider using air conditioning for comfort");
    }

    // Heating
    if temperature < 20.0 {
        recommendations.push("Home heating recommended for comfort");
    }

    // Ventilation
    if humidity > 70.0 && temperature > 20.0 {
        recommendations.push("Good ventilation recommended to reduce humidity");
    }

    // Beach day
    if temperature > 30.0 && humidity <= 60.0 {
        recommendations.push("Perfect weather for a beach day");
    }

    // Stargazing
    if (15.0..=20.0).contains(&temperature) && humidity < 50.0 && pressure > 1010.0 {
        recommendations.push("Ideal conditions for stargazing");
    }

    // Hiking
    if (18.0..=25.0).contains(&temperature) && humidity <= 70.0 {
        recommendations.push("Great weather for hiking");
    }

    // Indoor activities
    if temperature < 15.0 || humidity > 85.0 {
        recommendations.push("Consider indoor activities due to unfavorable weather");
    }

    // Gardening
    if (18.0..=26.0).contains(&temperature) && (50.0..=70.0).contains(&humidity) {
        recommendations.push("Good weather for gardening");
    }

    // Snow activities
    if temperature < 0.0 {
        recommendations.push("Perfect conditions for snow-related activities like skiing or snowboarding");
    }

    // Barbecue
    if (20.0..=30.0).contains(&temperature) && humidity <= 60.0 {
        recommendations.push("Great weather for a barbecue");
    }

    // Cycling
    if (16.0..=24.0).contains(&temperature) && humidity <= 70.0 {
        recommendations.push("Ideal conditions for cycling");
    }

    // Fishing
    if (15.0..=25.0).contains(&temperature) && humidity <= 80.0 {
        recommendations.push("Good weather for fishing");
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mild_day_exact_membership() {
        let recs = activity_recommendations(22.0, 60.0, 1005.0);
        assert_eq!(
            recs,
            vec![
                "Good conditions for outdoor exercise",
                "Great weather for hiking",
                "Good weather for gardening",
                "Great weather for a barbecue",
                "Ideal conditions for cycling",
                "Good weather for fishing",
            ]
        );
        // Ventilation needs humidity strictly above 70
        assert!(!recs.contains(&"Good ventilation recommended to reduce humidity"));
    }

    #[test]
    fn test_freezing_day() {
        let recs = activity_recommendations(-5.0, 30.0, 1020.0);
        assert_eq!(
            recs,
            vec![
                "Home heating recommended for comfort",
                "Consider indoor activities due to unfavorable weather",
                "Perfect conditions for snow-related activities like skiing or snowboarding",
            ]
        );
    }

    #[test]
    fn test_hot_humid_day() {
        let recs = activity_recommendations(31.0, 75.0, 1005.0);
        assert_eq!(
            recs,
            vec![
                "Favorable for drying clothes outdoors",
                "Consider using air conditioning for comfort",
                "Good ventilation recommended to reduce humidity",
            ]
        );
    }

    #[test]
    fn test_air_conditioning_or_branch() {
        // Not hot enough for the first branch, humid enough for the second
        let recs = activity_recommendations(25.0, 75.0, 1008.0);
        assert!(recs.contains(&"Consider using air conditioning for comfort"));
    }

    #[test]
    fn test_stargazing_needs_high_pressure() {
        assert!(activity_recommendations(18.0, 45.0, 1012.0)
            .contains(&"Ideal conditions for stargazing"));
        assert!(!activity_recommendations(18.0, 45.0, 1008.0)
            .contains(&"Ideal conditions for stargazing"));
    }

    #[test]
    fn test_boundary_values_use_strict_comparisons() {
        // 24C sits exactly on the air-conditioning boundary (needs > 24)
        // and 85% exactly on the indoor-activities one (needs > 85)
        let recs = activity_recommendations(24.0, 85.0, 1005.0);
        assert_eq!(
            recs,
            vec!["Good ventilation recommended to reduce humidity"]
        );
    }
}
