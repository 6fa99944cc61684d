use std::time::Duration;

/// Configuration for the timeout durations used by outbound calls
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Portal HTTP request timeout
    pub http_request: Duration,

    /// Notification relay request timeout
    pub notification_request: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        GLOBAL_TIMEOUT_CONFIG.clone()
    }
}

impl TimeoutConfig {
    /// Get the global timeout configuration
    pub fn global() -> &'static Self {
        &GLOBAL_TIMEOUT_CONFIG
    }
}

/// Global timeout configuration instance
static GLOBAL_TIMEOUT_CONFIG: TimeoutConfig = TimeoutConfig {
    http_request: Duration::from_secs(30),
    notification_request: Duration::from_secs(10),
};
