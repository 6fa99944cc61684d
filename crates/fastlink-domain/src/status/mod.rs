mod extractor;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

pub use extractor::RegexStatusExtractor;

pub const DEFAULT_TOTAL_TRAFFIC: &str = "0GB";
pub const DEFAULT_USED_TODAY: &str = "0MB";
pub const DEFAULT_REMAINING_TRAFFIC: &str = "0GB";
pub const DEFAULT_UNUSED_TRAFFIC: &str = "0GB";

/// Account status scraped from the portal's user page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatus {
    pub can_check_in: bool,
    pub total_traffic: String,
    pub used_today: String,
    pub remaining_traffic: String,
    pub unused_traffic: String,
    /// Raw `Class_Expire` value, empty when the page does not carry one
    pub expiry_date: String,
    /// Days until the next day-25 reset, regardless of `expiry_date`
    pub days_until_reset: i64,
}

impl AccountStatus {
    /// Traffic shown to the user as "remaining": unused traffic wins when present
    pub fn display_traffic(&self) -> &str {
        if self.unused_traffic.is_empty() {
            &self.remaining_traffic
        } else {
            &self.unused_traffic
        }
    }
}

/// Turns a raw status page into an [`AccountStatus`]
///
/// An error means the page could not be understood; callers must not
/// treat any part of it as a valid status.
pub trait StatusExtractor: Send + Sync {
    fn extract(&self, html: &str, now: NaiveDateTime) -> Result<AccountStatus, DomainError>;
}
