//! Cron scheduler for the periodic expiry sweep.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing;

use visadesk_core::config::sweep::ScheduleConfig;
use visadesk_core::error::AppError;
use visadesk_service::sweep::engine::SweepEngine;

/// Cron-based scheduler that runs the sweep in-process.
///
/// Uses the same [`SweepEngine`] as the HTTP trigger, so a scheduled run
/// and a manual run share the same idempotence markers.
pub struct SweepScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
    /// Sweep engine shared with the API.
    engine: Arc<SweepEngine>,
    /// Schedule settings.
    config: ScheduleConfig,
}

impl std::fmt::Debug for SweepScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SweepScheduler")
            .field("cron", &self.config.cron)
            .finish()
    }
}

impl SweepScheduler {
    /// Create a new scheduler.
    pub async fn new(engine: Arc<SweepEngine>, config: ScheduleConfig) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self {
            scheduler,
            engine,
            config,
        })
    }

    /// Register the sweep job and start the scheduler.
    pub async fn start(&self) -> Result<(), AppError> {
        let engine = Arc::clone(&self.engine);
        let job = CronJob::new_async(self.config.cron.as_str(), move |_uuid, _lock| {
            let engine = Arc::clone(&engine);
            Box::pin(async move {
                tracing::info!("Scheduled visa-expiry sweep starting");
                match engine.run().await {
                    Ok(report) => {
                        tracing::info!(
                            examined = report.examined,
                            dispatched = report.dispatched,
                            "Scheduled sweep finished"
                        );
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Scheduled sweep failed");
                    }
                }
            })
        })
        .map_err(|e| AppError::internal(format!("Failed to create sweep schedule: {e}")))?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add sweep schedule: {e}")))?;

        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        tracing::info!(cron = %self.config.cron, "Sweep scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler.
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        tracing::info!("Sweep scheduler shut down");
        Ok(())
    }
}
