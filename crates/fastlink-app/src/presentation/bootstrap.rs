use std::sync::Arc;

use anyhow::Result;
use log::info;

use fastlink_domain::clock::SystemClock;
use fastlink_domain::notification::NotificationSender;
use fastlink_domain::status::RegexStatusExtractor;
use fastlink_infrastructure::config::AppConfig;
use fastlink_infrastructure::http::PortalHttpClient;
use fastlink_infrastructure::notification::BarkSender;

use crate::application::services::{CheckInWorkflow, NotificationService};

/// Notification service backed by Bark when it is configured
pub fn build_notification_service(config: &AppConfig) -> Result<NotificationService> {
    let sender = match config.bark.clone() {
        Some(bark) => {
            info!("Bark notifications enabled ({})", bark.server_url());
            let sender = BarkSender::new(bark, &config.timeouts)?;
            Some(Arc::new(sender) as Arc<dyn NotificationSender>)
        }
        None => {
            info!("Bark notifications disabled");
            None
        }
    };

    Ok(NotificationService::new(sender))
}

/// Wire the production collaborators into a shared workflow
pub fn build_workflow(config: &AppConfig) -> Result<Arc<CheckInWorkflow>> {
    let portal = PortalHttpClient::with_timeouts(&config.portal_base_url, &config.timeouts)?;
    info!("Portal base URL: {}", portal.base_url());

    Ok(Arc::new(CheckInWorkflow::new(
        Arc::new(portal),
        Arc::new(RegexStatusExtractor::new()),
        Arc::new(SystemClock),
        config.credentials.clone(),
        build_notification_service(config)?,
    )))
}
