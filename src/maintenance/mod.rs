use std::sync::Arc;

use chrono_tz::Tz;
use thiserror::Error;
use tokio_cron_scheduler::{JobBuilder, JobScheduler};
use uuid::Uuid;

use crate::cache::AstroCache;
use crate::station::SampleRepository;

/// Runs shortly after local midnight, once the previous day can no
/// longer appear in a daily summary
const NIGHTLY_CRON: &str = "0 5 0 * * *";

#[derive(Error, Debug)]
pub enum MaintenanceError {
    #[error("Invalid cron schedule: {0}")]
    InvalidCron(String),

    #[error("Scheduler error: {0}")]
    Scheduler(String),
}

/// Nightly housekeeping: prune readings that fell out of the retention
/// window and sweep expired astronomy cache entries.
pub struct MaintenanceService {
    scheduler: JobScheduler,
    job_uuid: Uuid,
}

impl MaintenanceService {
    pub async fn new(
        store: Arc<dyn SampleRepository>,
        astro_cache: AstroCache,
        retention_minutes: i64,
        tz: Tz,
    ) -> Result<Self, MaintenanceError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| MaintenanceError::Scheduler(e.to_string()))?;

        let job = JobBuilder::new()
            .with_timezone(tz)
            .with_cron_job_type()
            .with_schedule(NIGHTLY_CRON)
            .map_err(|e| MaintenanceError::InvalidCron(e.to_string()))?
            .with_run_async(Box::new(move |_uuid, _lock| {
                let store = Arc::clone(&store);
                let astro_cache = Arc::clone(&astro_cache);

                Box::pin(async move {
                    let cutoff = chrono::Utc::now().timestamp() - retention_minutes * 60;
                    let pruned = store.prune_before(cutoff).await;
                    let swept = astro_cache.cleanup();
                    tracing::info!(pruned, swept, "Nightly maintenance complete");
                })
            }))
            .build()
            .map_err(|e| MaintenanceError::Scheduler(e.to_string()))?;

        let job_uuid = scheduler
            .add(job)
            .await
            .map_err(|e| MaintenanceError::Scheduler(e.to_string()))?;

        Ok(Self { scheduler, job_uuid })
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<(), MaintenanceError> {
        tracing::info!(job_uuid = %self.job_uuid, cron = NIGHTLY_CRON, "Starting maintenance scheduler");
        self.scheduler
            .start()
            .await
            .map_err(|e| MaintenanceError::Scheduler(e.to_string()))
    }
}
