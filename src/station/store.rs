use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::BTreeMap;

use super::models::SensorSample;

/// Storage abstraction for sensor readings
#[async_trait]
pub trait SampleRepository: Send + Sync {
    /// Insert a batch of readings for a sensor, skipping duplicates by
    /// timestamp. Returns the number of readings actually stored.
    async fn insert_batch(&self, sensor: &str, samples: Vec<SensorSample>) -> usize;

    /// Newest reading for a sensor
    async fn latest(&self, sensor: &str) -> Option<SensorSample>;

    /// Readings with `start <= timestamp <= end`, in timestamp order
    async fn range(&self, sensor: &str, start: i64, end: i64) -> Vec<SensorSample>;

    /// Drop readings older than `cutoff` across all sensors.
    /// Returns the number of readings removed.
    async fn prune_before(&self, cutoff: i64) -> usize;

    /// Known sensor ids
    async fn sensors(&self) -> Vec<String>;
}

/// In-memory reading store. Readings are keyed by timestamp per sensor,
/// so the window reads come back in chronological order for free.
#[derive(Default)]
pub struct MemorySampleStore {
    data: DashMap<String, BTreeMap<i64, SensorSample>>,
}

impl MemorySampleStore {
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
        }
    }
}

#[async_trait]
impl SampleRepository for MemorySampleStore {
    async fn insert_batch(&self, sensor: &str, samples: Vec<SensorSample>) -> usize {
        let mut series = self.data.entry(sensor.to_string()).or_default();
        let mut stored = 0;
        for sample in samples {
            if let std::collections::btree_map::Entry::Vacant(slot) =
                series.entry(sample.timestamp)
            {
                slot.insert(sample);
                stored += 1;
            }
        }
        stored
    }

    async fn latest(&self, sensor: &str) -> Option<SensorSample> {
        self.data
            .get(sensor)
            .and_then(|series| series.values().next_back().cloned())
    }

    async fn range(&self, sensor: &str, start: i64, end: i64) -> Vec<SensorSample> {
        self.data
            .get(sensor)
            .map(|series| series.range(start..=end).map(|(_, s)| s.clone()).collect())
            .unwrap_or_default()
    }

    async fn prune_before(&self, cutoff: i64) -> usize {
        let mut removed = 0;
        for mut entry in self.data.iter_mut() {
            let series = entry.value_mut();
            let keep = series.split_off(&cutoff);
            removed += series.len();
            *series = keep;
        }
        removed
    }

    async fn sensors(&self) -> Vec<String> {
        self.data.iter().map(|e| e.key().clone()).collect()
    }
}
