// Application layer: use-case orchestration plus the trigger adapters that drive it

pub mod application;
pub mod presentation;
