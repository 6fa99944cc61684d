use chrono::NaiveDate;

use fastlink_domain::reset::format_reset_date;
use fastlink_domain::status::AccountStatus;

use super::types::CheckInOutcome;

/// Multi-line plain-text report returned to the caller
pub fn build_report(status: &AccountStatus, next_reset: NaiveDate, outcome: &CheckInOutcome) -> String {
    [
        format!("Today Used: {}", status.used_today),
        format!("Unused Traffic: {}", status.display_traffic()),
        format!("Days Until Reset: {} days", status.days_until_reset),
        format!("Next Reset: {}", format_reset_date(next_reset)),
        format!("Check-in Status: {}", outcome.report_message()),
    ]
    .join("\n")
}
