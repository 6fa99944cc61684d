mod message;
mod portal;

pub use message::{repair_mojibake, ALREADY_CHECKED_IN_MESSAGE, CHECK_IN_FAILED_MESSAGE};
pub use portal::PortalClient;
