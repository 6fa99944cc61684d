use async_trait::async_trait;

use fastlink_domain::notification::{NotificationMessage, NotificationSender};
use fastlink_domain::shared::DomainError;

#[async_trait]
impl NotificationSender for super::BarkSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        let url = self.config.push_url();
        let payload = self.build_payload(message);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json; charset=utf-8")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                DomainError::Notification(format!("Failed to send Bark notification: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::Notification(format!(
                "Bark push failed with status {}: {}",
                status, body
            )));
        }

        log::info!("Bark notification sent: {}", message.title);
        Ok(())
    }

    async fn test(&self) -> Result<(), DomainError> {
        let test_message = NotificationMessage::new(
            "Fastlink Status",
            "Test notification from fastlink-checkin",
        );

        self.send(&test_message).await
    }
}
