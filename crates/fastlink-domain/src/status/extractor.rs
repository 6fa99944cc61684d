use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::{Captures, Regex};

use super::{
    AccountStatus, StatusExtractor, DEFAULT_REMAINING_TRAFFIC, DEFAULT_TOTAL_TRAFFIC,
    DEFAULT_UNUSED_TRAFFIC, DEFAULT_USED_TODAY,
};
use crate::reset::days_until_reset;
use crate::shared::DomainError;

/// Shown on the check-in button once today's check-in is done ("come back tomorrow")
pub const CHECKED_IN_MARKER: &str = "明日再来";

/// `trafficDountChat('<total>', '<used today>', '<remaining>', ...)` in the page's inline script
static TRAFFIC_CHART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"trafficDountChat\(\s*'([^']*)',\s*'([^']*)',\s*'([^']*)',")
        .expect("invalid traffic chart regex")
});

static UNUSED_TRAFFIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\["Unused_Traffic",\s*"([^"]+)"\]"#).expect("invalid unused traffic regex")
});

static CLASS_EXPIRE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\["Class_Expire",\s*"([^"]+)"\]"#).expect("invalid class expire regex")
});

/// Regex scraper for the portal's server-rendered `/user` page
///
/// Every field is extracted independently: a missing marker only
/// defaults that field, it never fails the whole page.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexStatusExtractor;

impl RegexStatusExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl StatusExtractor for RegexStatusExtractor {
    fn extract(&self, html: &str, now: NaiveDateTime) -> Result<AccountStatus, DomainError> {
        // Rejected rather than defaulted: callers report a failed fetch and
        // never check in on a blank page.
        if html.trim().is_empty() {
            return Err(DomainError::Parse("Status page is empty".to_string()));
        }

        let (total_traffic, used_today, remaining_traffic) = extract_traffic(html);

        Ok(AccountStatus {
            can_check_in: !html.contains(CHECKED_IN_MARKER),
            total_traffic,
            used_today,
            remaining_traffic,
            unused_traffic: capture(&UNUSED_TRAFFIC, html)
                .unwrap_or_else(|| DEFAULT_UNUSED_TRAFFIC.to_string()),
            expiry_date: capture(&CLASS_EXPIRE, html).unwrap_or_default(),
            days_until_reset: days_until_reset(now),
        })
    }
}

/// Extract (total, used today, remaining), defaulting each empty field on its own
fn extract_traffic(html: &str) -> (String, String, String) {
    let Some(caps) = TRAFFIC_CHART.captures(html) else {
        log::debug!("Traffic chart call not found in status page, using defaults");
        return (
            DEFAULT_TOTAL_TRAFFIC.to_string(),
            DEFAULT_USED_TODAY.to_string(),
            DEFAULT_REMAINING_TRAFFIC.to_string(),
        );
    };

    (
        field_or(&caps, 1, DEFAULT_TOTAL_TRAFFIC),
        field_or(&caps, 2, DEFAULT_USED_TODAY),
        field_or(&caps, 3, DEFAULT_REMAINING_TRAFFIC),
    )
}

fn field_or(caps: &Captures<'_>, index: usize, default: &str) -> String {
    match caps.get(index).map(|m| m.as_str().trim()) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

fn capture(regex: &Regex, html: &str) -> Option<String> {
    regex
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
