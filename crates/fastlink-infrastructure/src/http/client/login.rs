use reqwest::header;

use fastlink_domain::account::Credentials;
use fastlink_domain::session::{SessionToken, SessionTokenExtractor};
use fastlink_domain::shared::DomainError;

use super::types::{login_form_body, ACCEPT_JSON, FORM_CONTENT_TYPE, LOGIN_PATH};

impl super::PortalHttpClient {
    /// Log in with form credentials and collect the session cookies
    pub async fn post_login(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<SessionToken>, DomainError> {
        if !credentials.is_complete() {
            log::error!("Username or password not configured, skipping login");
            return Ok(None);
        }

        let url = self.endpoint(LOGIN_PATH);
        log::info!("Logging in to {} as {}", url, credentials.username());

        let response = self
            .client
            .post(&url)
            .header(header::ACCEPT, ACCEPT_JSON)
            .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(login_form_body(credentials.username(), credentials.password()))
            .send()
            .await
            .map_err(|e| Self::transport_error("send login request", e))?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Login failed with status {}", status);
            return Ok(None);
        }

        let token = SessionTokenExtractor::extract(
            response
                .headers()
                .get_all(header::SET_COOKIE)
                .iter()
                .filter_map(|value| value.to_str().ok()),
        );

        match &token {
            Some(token) => log::info!("Login success: {:?}", token),
            None => log::warn!("Login response carried no session cookies"),
        }

        Ok(token)
    }
}
