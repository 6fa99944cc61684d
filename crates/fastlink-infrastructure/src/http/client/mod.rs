mod check_in;
mod login;
mod portal;
mod status_page;
mod types;

pub use types::USER_AGENT;

use anyhow::{Context, Result};
use reqwest::{header, Client, RequestBuilder};

use fastlink_domain::session::SessionToken;
use fastlink_domain::shared::DomainError;

use crate::config::TimeoutConfig;

/// Session client for the membership portal
///
/// Holds no cookie store: the session token from `login` is passed explicitly
/// to every later call and dropped with the run.
pub struct PortalHttpClient {
    pub(super) client: Client,
    pub(super) base_url: String,
}

impl PortalHttpClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeouts(base_url, TimeoutConfig::global())
    }

    pub fn with_timeouts(base_url: &str, timeouts: &TimeoutConfig) -> Result<Self> {
        url::Url::parse(base_url).with_context(|| format!("Invalid portal base URL: {}", base_url))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeouts.http_request)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(super) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the session cookies to a request
    pub(super) fn with_session(request: RequestBuilder, token: &SessionToken) -> RequestBuilder {
        request.header(header::COOKIE, token.as_cookie_header())
    }

    pub(super) fn transport_error(action: &str, error: reqwest::Error) -> DomainError {
        DomainError::Transport(format!("Failed to {}: {}", action, error))
    }
}
