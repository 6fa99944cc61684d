use fastlink_domain::notification::NotificationMessage;
use serde_json::json;

impl super::BarkSender {
    /// JSON body accepted by the Bark `/push` endpoint
    pub(super) fn build_payload(&self, message: &NotificationMessage) -> serde_json::Value {
        json!({
            "title": message.title,
            "body": message.content,
            "group": message.group.as_deref().unwrap_or(super::DEFAULT_GROUP),
            "device_key": self.config.device_key(),
        })
    }
}
