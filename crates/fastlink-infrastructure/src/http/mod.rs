mod client;

pub use client::{PortalHttpClient, USER_AGENT};
