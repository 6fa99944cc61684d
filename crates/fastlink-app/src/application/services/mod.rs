mod check_in_workflow;
mod notification_service;
mod scheduler;

pub use check_in_workflow::{
    build_report, CheckInOutcome, CheckInWorkflow, FETCH_FAILED_MESSAGE, LOGIN_FAILED_MESSAGE,
};
pub use notification_service::{build_notification_body, NotificationService, NOTIFICATION_TITLE};
pub use scheduler::CheckInScheduler;
