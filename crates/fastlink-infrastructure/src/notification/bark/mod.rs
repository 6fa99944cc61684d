mod message_builder;
mod sender;

use anyhow::{Context, Result};
use reqwest::Client;

use fastlink_domain::notification::BarkConfig;

use crate::config::TimeoutConfig;

/// Group used when the message does not name one
pub const DEFAULT_GROUP: &str = "fastlink";

/// Bark push relay sender
pub struct BarkSender {
    config: BarkConfig,
    client: Client,
}

impl BarkSender {
    pub fn new(config: BarkConfig, timeouts: &TimeoutConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeouts.notification_request)
            .build()
            .context("Failed to create Bark HTTP client")?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &BarkConfig {
        &self.config
    }
}
