//! Shared error type across vitalcalc crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Missing, falsy, or mistyped request field.
    InvalidInput,
    /// Configuration could not be parsed or validated.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::InvalidInput => "INVALID_INPUT",
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, VitalError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum VitalError {
    /// Display text is part of the HTTP contract (`{"error": "Invalid input"}`).
    #[error("Invalid input")]
    InvalidInput,
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl VitalError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            VitalError::InvalidInput => ClientCode::InvalidInput,
            VitalError::BadConfig(_) => ClientCode::BadConfig,
            VitalError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            VitalError::Internal(_) => ClientCode::Internal,
        }
    }
}
