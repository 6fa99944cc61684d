use std::fmt;

use crate::shared::DomainError;

/// Bark relay configuration
///
/// Only built when both the server URL and the device key are known; its
/// absence disables notifications.
#[derive(Clone, PartialEq, Eq)]
pub struct BarkConfig {
    server_url: String,
    device_key: String,
}

impl BarkConfig {
    pub fn new(server_url: impl Into<String>, device_key: impl Into<String>) -> Result<Self, DomainError> {
        let server_url = server_url.into().trim().trim_end_matches('/').to_string();
        let device_key = device_key.into().trim().to_string();

        if server_url.is_empty() {
            return Err(DomainError::Config("Bark server URL cannot be empty".to_string()));
        }
        if device_key.is_empty() {
            return Err(DomainError::Config("Bark device key cannot be empty".to_string()));
        }

        Ok(Self {
            server_url,
            device_key,
        })
    }

    /// Server URL without a trailing slash
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn device_key(&self) -> &str {
        &self.device_key
    }

    pub fn push_url(&self) -> String {
        format!("{}/push", self.server_url)
    }
}

impl fmt::Debug for BarkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarkConfig")
            .field("server_url", &self.server_url)
            .field("device_key", &"***")
            .finish()
    }
}
