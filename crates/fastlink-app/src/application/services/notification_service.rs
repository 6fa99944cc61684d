use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use log::{error, info};
use std::sync::Arc;

use fastlink_domain::notification::{NotificationMessage, NotificationSender};
use fastlink_domain::reset::format_reset_date;
use fastlink_domain::status::AccountStatus;

use super::CheckInOutcome;

pub const NOTIFICATION_TITLE: &str = "Fastlink Status";
const NOTIFICATION_GROUP: &str = "fastlink";

/// Best-effort push of the run summary through the configured relay
pub struct NotificationService {
    sender: Option<Arc<dyn NotificationSender>>,
}

impl NotificationService {
    pub fn new(sender: Option<Arc<dyn NotificationSender>>) -> Self {
        Self { sender }
    }

    pub fn disabled() -> Self {
        Self { sender: None }
    }

    pub fn is_configured(&self) -> bool {
        self.sender.is_some()
    }

    /// Send the summary. Failures are logged, never returned.
    pub async fn notify(&self, outcome: &CheckInOutcome, status: &AccountStatus, next_reset: NaiveDate) {
        let Some(sender) = &self.sender else {
            info!("Notification relay not configured, skipping notification");
            return;
        };

        let message = NotificationMessage::new(
            NOTIFICATION_TITLE,
            build_notification_body(outcome, status, next_reset),
        )
        .with_group(NOTIFICATION_GROUP);

        match sender.send(&message).await {
            Ok(()) => info!("Notification sent: {}", message.content),
            Err(e) => error!("Failed to send notification: {}", e.format_with_code()),
        }
    }
}

impl NotificationService {
    /// Push the relay's connectivity-test message. Unlike `notify`, failures
    /// are returned so the operator sees them.
    pub async fn send_test(&self) -> Result<()> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| anyhow!("Bark notifications are not configured"))?;

        sender.test().await?;
        info!("Test notification sent");
        Ok(())
    }
}

/// Single-line notification body
pub fn build_notification_body(
    outcome: &CheckInOutcome,
    status: &AccountStatus,
    next_reset: NaiveDate,
) -> String {
    let lead = match outcome {
        CheckInOutcome::AlreadyCheckedIn => "Already checked in",
        CheckInOutcome::Submitted(message) => message.as_str(),
    };

    format!(
        "{} | Used: {} | Remaining: {} | Next Reset: {}",
        lead,
        status.used_today,
        status.display_traffic(),
        format_reset_date(next_reset)
    )
}
