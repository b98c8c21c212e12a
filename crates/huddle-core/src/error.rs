//! Error types for calls to the Huddle backend service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a backend service call.
///
/// Every collaborator call resolves to either its typed response or one of
/// these variants. Flows treat all of them as recoverable: the raw error is
/// logged by the caller and the user sees a localized notice instead.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ServiceError {
    /// The backend answered with a non-success status code.
    #[error("Service error: status {status} - {message}")]
    Status { status: u16, message: String },

    /// The request never completed (connect failure, timeout, broken transport).
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The response arrived but its body could not be decoded.
    #[error("Payload error: {message}")]
    Payload { message: String },
}

impl ServiceError {
    /// Creates a Status error
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates a Payload error
    pub fn payload(message: impl Into<String>) -> Self {
        Self::Payload {
            message: message.into(),
        }
    }

    /// Check if this is a transport-level failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if this is a non-success status response
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

/// A type alias for `Result<T, ServiceError>`.
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
