//! API-specific error types
//!
//! Classifies failures of backend calls and converts them into the domain
//! error that services and toasts understand.

use baitulmal_domain::{ApiErrorResponse, ApiFailure, BaitulMalError};
use reqwest::StatusCode;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// 401: the stored session is no longer valid
    Authentication,
    /// 4xx other than 401
    Client,
    /// 5xx
    Server,
    /// Connection, timeout or transport failure
    Network,
    /// Response body could not be decoded
    Decode,
    /// Client misconfiguration (bad base URL, unusable path)
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Client error: {0}")]
    Client(ApiFailure),

    #[error("Server error: {0}")]
    Server(ApiFailure),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Classify a non-success response
    ///
    /// The body is decoded as the backend's error envelope when possible;
    /// anything else leaves the message empty so callers fall back to the
    /// generic text.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let envelope = serde_json::from_slice::<ApiErrorResponse>(body).ok();
        let failure = ApiFailure::from_response(status.as_u16(), envelope);

        if status == StatusCode::UNAUTHORIZED {
            Self::Unauthorized(failure.to_string())
        } else if status.is_server_error() {
            Self::Server(failure)
        } else {
            Self::Client(failure)
        }
    }

    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Unauthorized(_) => ApiErrorCategory::Authentication,
            Self::Client(_) => ApiErrorCategory::Client,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Network(_) => ApiErrorCategory::Network,
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Backend failure details, when the backend answered
    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Client(failure) | Self::Server(failure) => Some(failure),
            _ => None,
        }
    }
}

impl From<BaitulMalError> for ApiError {
    fn from(err: BaitulMalError) -> Self {
        match err {
            BaitulMalError::Unauthorized(message) => Self::Unauthorized(message),
            BaitulMalError::Api(failure) if failure.status >= 500 => Self::Server(failure),
            BaitulMalError::Api(failure) => Self::Client(failure),
            BaitulMalError::Config(message) => Self::Config(message),
            BaitulMalError::Internal(message) => Self::Decode(message),
            other => Self::Network(other.to_string()),
        }
    }
}

impl From<ApiError> for BaitulMalError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized(message) => Self::Unauthorized(message),
            ApiError::Client(failure) | ApiError::Server(failure) => Self::Api(failure),
            ApiError::Network(message) => Self::Network(message),
            ApiError::Decode(message) => Self::Internal(message),
            ApiError::Config(message) => Self::Config(message),
        }
    }
}
