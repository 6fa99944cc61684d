use serde::{Deserialize, Serialize};

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Configuration (1xxx)
    InvalidConfig = 1001,

    // Portal page parsing (2xxx)
    ParseError = 2001,

    // Infrastructure (3xxx)
    TransportError = 3001,
    NotificationError = 3002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Notification error: {0}")]
    Notification(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Config(_) => ErrorCode::InvalidConfig,
            DomainError::Parse(_) => ErrorCode::ParseError,
            DomainError::Transport(_) => ErrorCode::TransportError,
            DomainError::Notification(_) => ErrorCode::NotificationError,
        }
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
