use fastlink_domain::check_in::ALREADY_CHECKED_IN_MESSAGE;

pub const LOGIN_FAILED_MESSAGE: &str =
    "Login failed: No cookies received or login credentials are incorrect";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to get homepage info";

/// What the decision step did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// The status page showed today's check-in as done; nothing was submitted
    AlreadyCheckedIn,
    /// Check-in was submitted; holds the portal's (repaired) message
    Submitted(String),
}

impl CheckInOutcome {
    /// Text for the report's status line
    pub fn report_message(&self) -> &str {
        match self {
            Self::AlreadyCheckedIn => ALREADY_CHECKED_IN_MESSAGE,
            Self::Submitted(message) => message,
        }
    }
}
