//! Process configuration
//!
//! Everything the service needs from its environment is read exactly once, in
//! [`AppConfig::from_env`], and handed to constructors from there. Empty
//! variables count as unset.

mod timeouts;

use std::net::SocketAddr;
use std::path::PathBuf;

use fastlink_domain::account::Credentials;
use fastlink_domain::notification::BarkConfig;
use fastlink_domain::shared::DomainError;

pub use timeouts::TimeoutConfig;

pub const ENV_USERNAME: &str = "FASTLINK_USERNAME";
pub const ENV_PASSWORD: &str = "FASTLINK_PASSWORD";
pub const ENV_BARK_SERVER: &str = "BARK_SERVER";
pub const ENV_BARK_DEVICE_KEY: &str = "BARK_DEVICE_KEY";
pub const ENV_BASE_URL: &str = "FASTLINK_BASE_URL";
pub const ENV_CHECKIN_CRON: &str = "FASTLINK_CHECKIN_CRON";
pub const ENV_LISTEN_ADDR: &str = "FASTLINK_LISTEN_ADDR";
pub const ENV_LOG_DIR: &str = "FASTLINK_LOG_DIR";

pub const DEFAULT_BASE_URL: &str = "http://fastlink.pro";
/// Six-field cron expression, evaluated in UTC
pub const DEFAULT_CHECKIN_CRON: &str = "0 0 1 * * *";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8787";

const APP_DIR_NAME: &str = "fastlink-checkin";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Credentials,
    /// `None` disables notifications
    pub bark: Option<BarkConfig>,
    pub portal_base_url: String,
    pub checkin_cron: String,
    pub listen_addr: SocketAddr,
    pub log_dir: PathBuf,
    pub timeouts: TimeoutConfig,
    /// Non-fatal problems found while reading the environment, for the caller
    /// to log once logging is up
    pub warnings: Vec<String>,
}

impl AppConfig {
    /// Build the configuration from process environment variables
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| non_empty(&lookup, key);
        let mut warnings = Vec::new();

        let username = get(ENV_USERNAME).unwrap_or_default();
        let password = get(ENV_PASSWORD).unwrap_or_default();
        if username.is_empty() || password.is_empty() {
            warnings.push(format!(
                "{} or {} is not set, every run will report a login failure",
                ENV_USERNAME, ENV_PASSWORD
            ));
        }

        let bark = match (get(ENV_BARK_SERVER), get(ENV_BARK_DEVICE_KEY)) {
            (Some(server), Some(key)) => Some(BarkConfig::new(server, key)?),
            (None, None) => None,
            _ => {
                warnings.push(format!(
                    "Only one of {} and {} is set, notifications are disabled",
                    ENV_BARK_SERVER, ENV_BARK_DEVICE_KEY
                ));
                None
            }
        };

        let portal_base_url = get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&portal_base_url).map_err(|e| {
            DomainError::Config(format!("Invalid {} '{}': {}", ENV_BASE_URL, portal_base_url, e))
        })?;

        let listen_addr_raw = get(ENV_LISTEN_ADDR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_addr_raw.parse::<SocketAddr>().map_err(|e| {
            DomainError::Config(format!("Invalid {} '{}': {}", ENV_LISTEN_ADDR, listen_addr_raw, e))
        })?;

        let log_dir = resolve_log_dir(&lookup);

        Ok(Self {
            credentials: Credentials::new(username, password),
            bark,
            portal_base_url,
            checkin_cron: get(ENV_CHECKIN_CRON).unwrap_or_else(|| DEFAULT_CHECKIN_CRON.to_string()),
            listen_addr,
            log_dir,
            timeouts: TimeoutConfig::default(),
            warnings,
        })
    }

    /// Log directory from the process environment, readable before the rest
    /// of the configuration so that logging can start first
    pub fn log_dir_from_env() -> PathBuf {
        resolve_log_dir(&|key: &str| std::env::var(key).ok())
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn resolve_log_dir<F>(lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, ENV_LOG_DIR)
        .map(PathBuf::from)
        .unwrap_or_else(default_log_dir)
}

/// `<local data dir>/fastlink-checkin/logs`, or `./logs` when the platform has none
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
