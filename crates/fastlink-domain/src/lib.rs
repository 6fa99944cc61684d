// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod account;
pub mod check_in;
pub mod clock;
pub mod notification;
pub mod reset;
pub mod session;
pub mod shared;
pub mod status;

// Re-exports for convenience
pub use shared::DomainError;
