use std::sync::Arc;

use anyhow::{anyhow, Result};
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use fastlink_domain::shared::DomainError;

use super::CheckInWorkflow;

/// Cron-driven trigger for the daily run
///
/// Schedules are evaluated in UTC. Each tick calls `run(false)`; the report is
/// logged and nothing is surfaced.
pub struct CheckInScheduler {
    scheduler: JobScheduler,
}

impl CheckInScheduler {
    /// Register the daily job and start ticking
    pub async fn start(workflow: Arc<CheckInWorkflow>, cron: &str) -> Result<Self> {
        let job = build_job(workflow, cron)?;

        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| anyhow!("Failed to create job scheduler: {}", e))?;
        scheduler
            .add(job)
            .await
            .map_err(|e| anyhow!("Failed to register check-in job: {}", e))?;
        scheduler
            .start()
            .await
            .map_err(|e| anyhow!("Failed to start job scheduler: {}", e))?;

        info!("Check-in scheduler started (cron: {}, UTC)", cron);
        Ok(Self { scheduler })
    }

    pub async fn shutdown(mut self) -> Result<()> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| anyhow!("Failed to stop job scheduler: {}", e))?;
        info!("Check-in scheduler stopped");
        Ok(())
    }
}

/// Build the cron job; an invalid expression is a configuration error
fn build_job(workflow: Arc<CheckInWorkflow>, cron: &str) -> Result<Job, DomainError> {
    Job::new_async(cron, move |_job_id, _scheduler| {
        let workflow = workflow.clone();
        Box::pin(async move {
            info!("Scheduled check-in triggered");
            if let Err(e) = workflow.run(false).await {
                error!("Scheduled check-in failed: {}", e);
            }
        })
    })
    .map_err(|e| DomainError::Config(format!("Invalid check-in cron '{}': {}", cron, e)))
}
