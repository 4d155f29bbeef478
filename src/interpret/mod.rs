pub mod activities;
pub mod classifier;
pub mod comfort;
pub mod handlers;
pub mod scales;

pub use activities::activity_recommendations;
pub use classifier::{interpret_weather, WeatherCondition};
pub use comfort::{humidex, humidex_comfort, HumidexComfort};
