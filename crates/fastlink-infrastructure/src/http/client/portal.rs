use async_trait::async_trait;

use fastlink_domain::account::Credentials;
use fastlink_domain::check_in::PortalClient;
use fastlink_domain::session::SessionToken;
use fastlink_domain::shared::DomainError;

#[async_trait]
impl PortalClient for super::PortalHttpClient {
    async fn login(&self, credentials: &Credentials) -> Result<Option<SessionToken>, DomainError> {
        self.post_login(credentials).await
    }

    async fn fetch_status_page(&self, token: &SessionToken) -> Result<Option<String>, DomainError> {
        self.get_status_page(token).await
    }

    async fn submit_checkin(&self, token: &SessionToken) -> Result<String, DomainError> {
        self.post_checkin(token).await
    }
}
