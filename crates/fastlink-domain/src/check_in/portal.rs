use async_trait::async_trait;

use crate::account::Credentials;
use crate::session::SessionToken;
use crate::shared::DomainError;

/// Membership portal session operations
///
/// Expected "no" answers (rejected login, non-2xx status) are `Ok(None)` or a
/// failure message; `Err` is reserved for transport failures the caller cannot
/// turn into a report line.
#[async_trait]
pub trait PortalClient: Send + Sync {
    /// Log in and collect the session cookies
    ///
    /// Returns `Ok(None)` without touching the network when credentials are incomplete.
    async fn login(&self, credentials: &Credentials) -> Result<Option<SessionToken>, DomainError>;

    /// Fetch the raw HTML of the user status page
    async fn fetch_status_page(&self, token: &SessionToken) -> Result<Option<String>, DomainError>;

    /// Submit today's check-in and return the server's message
    async fn submit_checkin(&self, token: &SessionToken) -> Result<String, DomainError>;
}
