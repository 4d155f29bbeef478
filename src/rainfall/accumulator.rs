use chrono::{DateTime, Timelike};
use chrono_tz::Tz;
use serde::Serialize;
use utoipa::ToSchema;

use crate::station::SensorSample;

/// Rainfall intensity classes, derived from the day's maximum
/// instantaneous rain rate (mm/h)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum RainIntensity {
    None,
    Light,
    Moderate,
    Heavy,
    Extreme,
}

impl RainIntensity {
    /// Lower bound inclusive, upper bound exclusive; zero is exact
    pub fn from_max_rate(max_rate: f64) -> Self {
        if max_rate == 0.0 {
            Self::None
        } else if max_rate < 2.5 {
            Self::Light
        } else if max_rate < 10.0 {
            Self::Moderate
        } else if max_rate < 50.0 {
            Self::Heavy
        } else {
            Self::Extreme
        }
    }
}

/// A maximal contiguous run of samples with rain rate above zero
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RainPeriod {
    /// Time of day of the first rainy sample, HH:MM:SS
    pub start_time: String,
    /// Time of day of the last rainy sample, HH:MM:SS
    pub end_time: String,
    /// Formatted duration, e.g. "1h 25m" or "5m"
    pub duration: String,
    /// Rainfall accumulated over the run, mm, rounded to 1 decimal
    pub amount: f64,
}

/// Daily rainfall aggregate for one sensor
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DailyRainfallSummary {
    /// Total accumulated rainfall since local midnight, mm, 1 decimal
    pub total: f64,
    /// Maximum instantaneous rain rate seen today, mm/h
    pub max_rain_rate: f64,
    pub intensity: RainIntensity,
    /// Rain periods, largest amount first
    pub periods: Vec<RainPeriod>,
}

impl DailyRainfallSummary {
    fn empty() -> Self {
        Self {
            total: 0.0,
            max_rain_rate: 0.0,
            intensity: RainIntensity::None,
            periods: Vec::new(),
        }
    }
}

/// A sample reduced to what the day walk needs
struct DaySample {
    seconds_of_day: i64,
    time: String,
    rate: f64,
}

struct OpenPeriod {
    start: usize,
    end: usize,
    amount: f64,
}

/// Compute today's accumulated rainfall and rain periods from a window of
/// readings.
///
/// `now` fixes both the calendar day and the timezone used to resolve each
/// timestamp to a local date; readings from other days are ignored, and
/// readings whose timestamp cannot be represented as a datetime are skipped.
/// Rain rate is integrated with the trapezoidal rule over consecutive pairs.
pub fn compute_daily_rainfall(samples: &[SensorSample], now: DateTime<Tz>) -> DailyRainfallSummary {
    let tz = now.timezone();
    let today = now.date_naive();

    let mut day: Vec<DaySample> = samples
        .iter()
        .filter_map(|sample| {
            let utc = DateTime::from_timestamp(sample.timestamp, 0)?;
            let local = utc.with_timezone(&tz);
            if local.date_naive() != today {
                return None;
            }
            Some(DaySample {
                seconds_of_day: i64::from(local.time().num_seconds_from_midnight()),
                time: local.format("%H:%M:%S").to_string(),
                rate: sample.rainrate.max(0.0),
            })
        })
        .collect();

    if day.is_empty() {
        return DailyRainfallSummary::empty();
    }

    day.sort_by_key(|s| s.seconds_of_day);

    let mut total = 0.0;
    let mut max_rate: f64 = 0.0;
    let mut open: Option<OpenPeriod> = None;
    let mut closed: Vec<OpenPeriod> = Vec::new();

    for i in 0..day.len() {
        let rate = day[i].rate;
        max_rate = max_rate.max(rate);

        if i == 0 {
            // A leading rainy sample opens a period with nothing
            // accumulated yet
            if rate > 0.0 {
                open = Some(OpenPeriod {
                    start: 0,
                    end: 0,
                    amount: 0.0,
                });
            }
            continue;
        }

        let prev = &day[i - 1];
        let mut elapsed = day[i].seconds_of_day - prev.seconds_of_day;
        // Day-wrap guard for a pair that goes backwards in time-of-day
        if elapsed < 0 {
            elapsed += 24 * 3600;
        }
        let elapsed_hours = elapsed as f64 / 3600.0;
        let contribution = elapsed_hours * (prev.rate + rate) / 2.0;
        total += contribution;

        if rate > 0.0 {
            match open.as_mut() {
                Some(period) => {
                    period.end = i;
                    period.amount += contribution;
                }
                None => {
                    open = Some(OpenPeriod {
                        start: i,
                        end: i,
                        amount: contribution,
                    });
                }
            }
        } else if let Some(period) = open.take() {
            // Rain stopped; the period ends at the last rainy sample
            closed.push(period);
        }
    }

    if let Some(period) = open.take() {
        closed.push(period);
    }

    closed.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let periods = closed
        .into_iter()
        .map(|p| RainPeriod {
            start_time: day[p.start].time.clone(),
            end_time: day[p.end].time.clone(),
            duration: format_duration(day[p.start].seconds_of_day, day[p.end].seconds_of_day),
            amount: round_1(p.amount),
        })
        .collect();

    DailyRainfallSummary {
        total: round_1(total),
        max_rain_rate: max_rate,
        intensity: RainIntensity::from_max_rate(max_rate),
        periods,
    }
}

/// Format the span between two times of day, minute granularity
fn format_duration(start_seconds: i64, end_seconds: i64) -> String {
    let start_minutes = start_seconds / 60;
    let end_minutes = end_seconds / 60;
    let mut minutes = end_minutes - start_minutes;
    if minutes < 0 {
        minutes += 24 * 60;
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, remaining)
    } else {
        format!("{}m", remaining)
    }
}

fn round_1(val: f64) -> f64 {
    (val * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Asia::Jakarta;

    fn at(hour: u32, minute: u32, rate: f64) -> SensorSample {
        let ts = Jakarta
            .with_ymd_and_hms(2025, 5, 10, hour, minute, 0)
            .unwrap()
            .timestamp();
        rainy(ts, rate)
    }

    fn rainy(timestamp: i64, rainrate: f64) -> SensorSample {
        SensorSample {
            timestamp,
            temperature: 27.0,
            humidity: 80.0,
            pressure: 1008.0,
            dew: 22.0,
            volt: 3.9,
            rainfall: 0.0,
            rainrate,
            sunlight: 0.0,
            windspeed: 0.0,
            windir: 0.0,
        }
    }

    fn noon() -> DateTime<Tz> {
        Jakarta.with_ymd_and_hms(2025, 5, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let summary = compute_daily_rainfall(&[], noon());
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.intensity, RainIntensity::None);
        assert!(summary.periods.is_empty());
    }

    #[test]
    fn test_all_dry_day() {
        let samples = vec![at(8, 0, 0.0), at(8, 5, 0.0), at(8, 10, 0.0)];
        let summary = compute_daily_rainfall(&samples, noon());
        assert_eq!(summary.total, 0.0);
        assert!(summary.periods.is_empty());
        assert_eq!(summary.intensity, RainIntensity::None);
    }

    #[test]
    fn test_single_shower() {
        // 5-minute spacing: trapezoids (0+4)/2, (4+8)/2, (8+0)/2 over 1/12 h
        let samples = vec![at(8, 0, 0.0), at(8, 5, 4.0), at(8, 10, 8.0), at(8, 15, 0.0)];
        let summary = compute_daily_rainfall(&samples, noon());

        assert_eq!(summary.total, 1.0);
        assert_eq!(summary.max_rain_rate, 8.0);
        assert_eq!(summary.intensity, RainIntensity::Moderate);

        assert_eq!(summary.periods.len(), 1);
        let period = &summary.periods[0];
        assert_eq!(period.start_time, "08:05:00");
        assert_eq!(period.end_time, "08:10:00");
        assert_eq!(period.duration, "5m");
        // Entry pair (2/12) plus rainy pair (6/12), closing pair excluded
        assert_eq!(period.amount, 0.7);
    }

    #[test]
    fn test_period_amount_matches_trapezoid_sum() {
        let samples = vec![
            at(9, 0, 0.0),
            at(9, 10, 6.0),
            at(9, 20, 6.0),
            at(9, 30, 0.0),
        ];
        let summary = compute_daily_rainfall(&samples, noon());
        assert_eq!(summary.periods.len(), 1);
        // Pairs ending at a rainy sample: (0+6)/2/6 + (6+6)/2/6
        let expected = (3.0 / 6.0) + (6.0 / 6.0);
        assert_eq!(summary.periods[0].amount, (expected * 10.0_f64).round() / 10.0);
    }

    #[test]
    fn test_periods_ranked_by_amount() {
        let samples = vec![
            at(6, 0, 0.0),
            at(6, 30, 2.0),
            at(7, 0, 0.0),
            at(14, 0, 0.0),
            at(14, 30, 20.0),
            at(15, 0, 20.0),
            at(15, 30, 0.0),
        ];
        let summary = compute_daily_rainfall(&samples, noon());
        assert_eq!(summary.periods.len(), 2);
        assert_eq!(summary.periods[0].start_time, "14:30:00");
        assert!(summary.periods[0].amount > summary.periods[1].amount);
        assert_eq!(summary.periods[0].duration, "30m");
        assert_eq!(summary.intensity, RainIntensity::Heavy);
    }

    #[test]
    fn test_still_raining_at_window_end() {
        let samples = vec![at(11, 0, 0.0), at(11, 30, 3.0), at(11, 55, 5.0)];
        let summary = compute_daily_rainfall(&samples, noon());
        assert_eq!(summary.periods.len(), 1);
        assert_eq!(summary.periods[0].end_time, "11:55:00");
        assert_eq!(summary.periods[0].duration, "25m");
    }

    #[test]
    fn test_single_rainy_sample_is_zero_amount_period() {
        let samples = vec![at(10, 0, 3.0)];
        let summary = compute_daily_rainfall(&samples, noon());
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.periods.len(), 1);
        assert_eq!(summary.periods[0].amount, 0.0);
        assert_eq!(summary.periods[0].duration, "0m");
        // Rate 3.0 sits in the [2.5, 10) band
        assert_eq!(summary.intensity, RainIntensity::Moderate);
    }

    #[test]
    fn test_other_days_are_filtered_out() {
        let yesterday = Jakarta
            .with_ymd_and_hms(2025, 5, 9, 8, 0, 0)
            .unwrap()
            .timestamp();
        let samples = vec![rainy(yesterday, 40.0), at(8, 0, 0.0), at(8, 5, 1.0)];
        let summary = compute_daily_rainfall(&samples, noon());
        assert_eq!(summary.max_rain_rate, 1.0);
        assert_eq!(summary.intensity, RainIntensity::Light);
    }

    #[test]
    fn test_unrepresentable_timestamp_is_skipped() {
        let samples = vec![rainy(i64::MAX, 90.0), at(8, 0, 0.0), at(8, 5, 1.0)];
        let summary = compute_daily_rainfall(&samples, noon());
        assert_eq!(summary.max_rain_rate, 1.0);
    }

    #[test]
    fn test_unsorted_input_is_ordered_before_walking() {
        let sorted = vec![at(8, 0, 0.0), at(8, 5, 4.0), at(8, 10, 0.0)];
        let shuffled = vec![at(8, 10, 0.0), at(8, 0, 0.0), at(8, 5, 4.0)];
        assert_eq!(
            compute_daily_rainfall(&sorted, noon()),
            compute_daily_rainfall(&shuffled, noon())
        );
    }

    #[test]
    fn test_idempotent() {
        let samples = vec![at(8, 0, 0.0), at(8, 5, 4.0), at(8, 10, 8.0), at(8, 15, 0.0)];
        let first = compute_daily_rainfall(&samples, noon());
        let second = compute_daily_rainfall(&samples, noon());
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_never_negative() {
        let samples = vec![at(8, 0, 0.0), at(8, 5, 0.2), at(8, 6, 0.0), at(9, 0, 12.0)];
        let summary = compute_daily_rainfall(&samples, noon());
        assert!(summary.total >= 0.0);
    }

    #[test]
    fn test_intensity_thresholds() {
        assert_eq!(RainIntensity::from_max_rate(0.0), RainIntensity::None);
        assert_eq!(RainIntensity::from_max_rate(0.1), RainIntensity::Light);
        assert_eq!(RainIntensity::from_max_rate(2.4), RainIntensity::Light);
        assert_eq!(RainIntensity::from_max_rate(2.5), RainIntensity::Moderate);
        assert_eq!(RainIntensity::from_max_rate(9.9), RainIntensity::Moderate);
        assert_eq!(RainIntensity::from_max_rate(10.0), RainIntensity::Heavy);
        assert_eq!(RainIntensity::from_max_rate(49.9), RainIntensity::Heavy);
        assert_eq!(RainIntensity::from_max_rate(50.0), RainIntensity::Extreme);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(8 * 3600, 8 * 3600), "0m");
        assert_eq!(format_duration(8 * 3600, 8 * 3600 + 300), "5m");
        assert_eq!(format_duration(8 * 3600, 9 * 3600 + 25 * 60), "1h 25m");
        // Wrap across midnight: 23:30 to 00:10
        assert_eq!(format_duration(23 * 3600 + 30 * 60, 600), "40m");
        // 23:30 to 01:10 the next day
        assert_eq!(format_duration(23 * 3600 + 30 * 60, 4200), "1h 40m");
    }
}
