mod report;
mod types;

pub use report::build_report;
pub use types::{CheckInOutcome, FETCH_FAILED_MESSAGE, LOGIN_FAILED_MESSAGE};

use std::sync::Arc;

use anyhow::Result;
use log::{error, info, warn};
use tracing::Instrument;
use uuid::Uuid;

use fastlink_domain::account::Credentials;
use fastlink_domain::check_in::PortalClient;
use fastlink_domain::clock::Clock;
use fastlink_domain::reset::next_reset_date;
use fastlink_domain::status::StatusExtractor;

use super::NotificationService;

/// One daily check-in run: login, read status, check in if needed, notify, report
///
/// Holds only immutable collaborators, so a single instance is shared behind
/// an `Arc` by the timer and the HTTP trigger.
pub struct CheckInWorkflow {
    portal: Arc<dyn PortalClient>,
    extractor: Arc<dyn StatusExtractor>,
    clock: Arc<dyn Clock>,
    credentials: Credentials,
    notifications: NotificationService,
}

impl CheckInWorkflow {
    pub fn new(
        portal: Arc<dyn PortalClient>,
        extractor: Arc<dyn StatusExtractor>,
        clock: Arc<dyn Clock>,
        credentials: Credentials,
        notifications: NotificationService,
    ) -> Self {
        Self {
            portal,
            extractor,
            clock,
            credentials,
            notifications,
        }
    }

    /// Run the workflow once
    ///
    /// Terminal failures (login, status page) come back as `Ok` with a
    /// descriptive message. Only transport errors are returned as `Err`.
    pub async fn run(&self, force_notify: bool) -> Result<String> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("check_in_run", run_id = %run_id, force_notify);

        async {
            info!("Starting check-in run");
            let result = self.execute(force_notify).await;
            match &result {
                Ok(report) => info!("Check-in run finished:\n{}", report),
                Err(e) => error!("Check-in run failed: {}", e),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn execute(&self, force_notify: bool) -> Result<String> {
        let Some(token) = self.portal.login(&self.credentials).await? else {
            warn!("{}", LOGIN_FAILED_MESSAGE);
            return Ok(LOGIN_FAILED_MESSAGE.to_string());
        };

        let now = self.clock.now();

        let Some(html) = self.portal.fetch_status_page(&token).await? else {
            warn!("{}", FETCH_FAILED_MESSAGE);
            return Ok(FETCH_FAILED_MESSAGE.to_string());
        };

        let status = match self.extractor.extract(&html, now) {
            Ok(status) => status,
            Err(e) => {
                error!("Failed to read status page: {}", e.format_with_code());
                return Ok(FETCH_FAILED_MESSAGE.to_string());
            }
        };

        let next_reset = next_reset_date(&status.expiry_date, now.date());
        info!(
            "Status: can_check_in={}, used_today={}, traffic={}, next_reset={}",
            status.can_check_in,
            status.used_today,
            status.display_traffic(),
            next_reset
        );

        let outcome = if status.can_check_in {
            let message = self.portal.submit_checkin(&token).await?;
            info!("Check-in result: {}", message);
            CheckInOutcome::Submitted(message)
        } else {
            info!("Already checked in today, skipping check-in");
            CheckInOutcome::AlreadyCheckedIn
        };

        if self.notifications.is_configured() || force_notify {
            self.notifications.notify(&outcome, &status, next_reset).await;
        }

        Ok(build_report(&status, next_reset, &outcome))
    }
}
