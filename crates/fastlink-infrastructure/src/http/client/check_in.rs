use reqwest::header;

use fastlink_domain::check_in::{repair_mojibake, CHECK_IN_FAILED_MESSAGE};
use fastlink_domain::session::SessionToken;
use fastlink_domain::shared::DomainError;

use super::types::{CheckInResponse, ACCEPT_JSON, CHECK_IN_PATH};

impl super::PortalHttpClient {
    /// Submit the daily check-in and return the portal's message
    pub async fn post_checkin(&self, token: &SessionToken) -> Result<String, DomainError> {
        let url = self.endpoint(CHECK_IN_PATH);

        let request = self.client.post(&url).header(header::ACCEPT, ACCEPT_JSON);
        let response = Self::with_session(request, token)
            .send()
            .await
            .map_err(|e| Self::transport_error("send check-in request", e))?;

        let status = response.status();
        log::info!("Check-in response status: {}", status);

        if !status.is_success() {
            log::error!("Check-in failed: {}", status);
            return Ok(CHECK_IN_FAILED_MESSAGE.to_string());
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                log::error!("Failed to read check-in response: {}", e);
                return Ok(CHECK_IN_FAILED_MESSAGE.to_string());
            }
        };

        log::debug!("Check-in response body: {}", text);

        match serde_json::from_str::<CheckInResponse>(&text) {
            Ok(CheckInResponse { msg: Some(msg) }) => Ok(repair_mojibake(&msg)),
            Ok(CheckInResponse { msg: None }) => {
                log::warn!("Check-in response has no 'msg' field: {}", text);
                Ok(CHECK_IN_FAILED_MESSAGE.to_string())
            }
            Err(e) => {
                log::warn!(
                    "Failed to parse check-in response as JSON ({}): {}",
                    e,
                    text.chars().take(200).collect::<String>()
                );
                Ok(CHECK_IN_FAILED_MESSAGE.to_string())
            }
        }
    }
}
