//! In-memory stand-ins for the portal and the notification relay

#![allow(dead_code)]

pub mod mock_server;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use fastlink_app::application::services::{CheckInWorkflow, NotificationService};
use fastlink_domain::account::Credentials;
use fastlink_domain::check_in::PortalClient;
use fastlink_domain::clock::FixedClock;
use fastlink_domain::notification::{NotificationMessage, NotificationSender};
use fastlink_domain::session::SessionToken;
use fastlink_domain::shared::DomainError;
use fastlink_domain::status::RegexStatusExtractor;

pub const CHECKED_IN_PAGE: &str = r##"
    <a href="#" class="btn btn-icon disabled"><span>明日再来</span></a>
    <script>
      trafficDountChat('200GB', '1.35GB', '158.2GB', '21%');
      $crisp.push(["set", "session:data", [[["Unused_Traffic", "150GB"], ["Class_Expire", "2024-11-10 00:00:00"]]]]);
    </script>
"##;

pub const NOT_CHECKED_IN_PAGE: &str = r##"
    <a href="#" onclick="checkin()" class="btn btn-primary">每日签到</a>
    <script>trafficDountChat('200GB', '0B', '160GB', '20%');</script>
"##;

/// 2024-03-10 12:00, fifteen days before the 25th
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub struct FakePortal {
    pub login_token: Option<String>,
    pub login_transport_error: bool,
    pub page: Option<String>,
    pub checkin_message: String,
    pub calls: Mutex<Vec<&'static str>>,
}

impl Default for FakePortal {
    fn default() -> Self {
        Self {
            login_token: Some("uid=42; key=abc123".to_string()),
            login_transport_error: false,
            page: Some(CHECKED_IN_PAGE.to_string()),
            checkin_message: "Got 512MB".to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakePortal {
    pub fn with_page(page: &str) -> Self {
        Self {
            page: Some(page.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PortalClient for FakePortal {
    async fn login(&self, _credentials: &Credentials) -> Result<Option<SessionToken>, DomainError> {
        self.record("login");
        if self.login_transport_error {
            return Err(DomainError::Transport("connection refused".to_string()));
        }
        Ok(self.login_token.clone().and_then(SessionToken::new))
    }

    async fn fetch_status_page(&self, _token: &SessionToken) -> Result<Option<String>, DomainError> {
        self.record("fetch_status_page");
        Ok(self.page.clone())
    }

    async fn submit_checkin(&self, _token: &SessionToken) -> Result<String, DomainError> {
        self.record("submit_checkin");
        Ok(self.checkin_message.clone())
    }
}

/// Keeps every message it is asked to send
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<NotificationMessage>>,
}

impl RecordingSender {
    pub fn sent(&self) -> Vec<NotificationMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for RecordingSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn test(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

pub fn workflow(portal: Arc<FakePortal>, sender: Option<Arc<RecordingSender>>) -> CheckInWorkflow {
    let sender = sender.map(|s| s as Arc<dyn NotificationSender>);
    CheckInWorkflow::new(
        portal,
        Arc::new(RegexStatusExtractor::new()),
        Arc::new(FixedClock(fixed_now())),
        Credentials::new("user@example.com", "secret"),
        NotificationService::new(sender),
    )
}
