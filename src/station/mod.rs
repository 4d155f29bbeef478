pub mod handlers;
pub mod models;
pub mod store;

pub use models::SensorSample;
pub use store::{MemorySampleStore, SampleRepository};
