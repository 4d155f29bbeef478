pub mod accumulator;
pub mod handlers;

pub use accumulator::{compute_daily_rainfall, DailyRainfallSummary, RainIntensity, RainPeriod};
