use reqwest::header;

use fastlink_domain::session::SessionToken;
use fastlink_domain::shared::DomainError;

use super::types::{ACCEPT_HTML, STATUS_PAGE_PATH};

impl super::PortalHttpClient {
    /// Fetch the user page HTML
    pub async fn get_status_page(&self, token: &SessionToken) -> Result<Option<String>, DomainError> {
        let url = self.endpoint(STATUS_PAGE_PATH);

        let request = self.client.get(&url).header(header::ACCEPT, ACCEPT_HTML);
        let response = Self::with_session(request, token)
            .send()
            .await
            .map_err(|e| Self::transport_error("fetch user page", e))?;

        let status = response.status();
        log::info!("User page response status: {}", status);

        if !status.is_success() {
            log::error!("Failed to access user page: {}", status);
            return Ok(None);
        }

        match response.text().await {
            Ok(html) => {
                log::debug!("User page length: {} bytes", html.len());
                Ok(Some(html))
            }
            Err(e) => {
                log::error!("Failed to read user page body: {}", e);
                Ok(None)
            }
        }
    }
}
