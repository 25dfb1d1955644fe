//! Error types used throughout the application

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::UNKNOWN_ERROR_MESSAGE;

/// Main error type for the Baitul Mal client
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum BaitulMalError {
    #[error("Network error: {0}")]
    Network(String),

    /// The backend rejected the session; the caller should sign in again.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The backend answered with a non-success status.
    #[error("{0}")]
    Api(ApiFailure),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BaitulMalError {
    /// Message supplied by the backend, if this error carries one
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Api(failure) => failure.message.as_deref(),
            _ => None,
        }
    }

    /// Machine-readable backend error code, if any
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Api(failure) => failure.error_code.as_deref(),
            _ => None,
        }
    }

    /// Text suitable for a notification: the backend message or a generic
    /// fallback
    pub fn user_message(&self) -> String {
        self.backend_message().unwrap_or(UNKNOWN_ERROR_MESSAGE).to_string()
    }

    /// Whether the session should be cleared and the user sent to login
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

/// Non-success response from the REST backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFailure {
    pub status: u16,
    pub message: Option<String>,
    pub error_code: Option<String>,
    pub details: Option<String>,
}

impl ApiFailure {
    /// Build from a status code and the decoded error body, if any
    pub fn from_response(status: u16, body: Option<ApiErrorResponse>) -> Self {
        let body = body.unwrap_or_default();
        Self {
            status,
            message: body.message.filter(|m| !m.trim().is_empty()),
            error_code: body.error_code.filter(|c| !c.trim().is_empty()),
            details: body.details,
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message.as_deref().unwrap_or(UNKNOWN_ERROR_MESSAGE);
        match &self.error_code {
            Some(code) => write!(f, "Backend error {} ({code}): {message}", self.status),
            None => write!(f, "Backend error {}: {message}", self.status),
        }
    }
}

/// Error body returned by the backend
///
/// Field names are PascalCase on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub stack_trace: Option<String>,
}

/// Result type alias for Baitul Mal operations
pub type Result<T> = std::result::Result<T, BaitulMalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_backend_message() {
        let err = BaitulMalError::Api(ApiFailure::from_response(
            400,
            Some(ApiErrorResponse {
                message: Some("Sector name already exists".into()),
                ..ApiErrorResponse::default()
            }),
        ));
        assert_eq!(err.user_message(), "Sector name already exists");
    }

    #[test]
    fn user_message_falls_back_for_network_and_blank_messages() {
        assert_eq!(
            BaitulMalError::Network("connection refused".into()).user_message(),
            UNKNOWN_ERROR_MESSAGE
        );
        let blank = BaitulMalError::Api(ApiFailure::from_response(
            500,
            Some(ApiErrorResponse { message: Some("  ".into()), ..ApiErrorResponse::default() }),
        ));
        assert_eq!(blank.user_message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn error_body_decodes_pascal_case() {
        let body: ApiErrorResponse = serde_json::from_str(
            r#"{"Message":"Amount invalid","ErrorCode":"VALIDATION","Details":"x","StackTrace":null}"#,
        )
        .expect("valid body");
        assert_eq!(body.message.as_deref(), Some("Amount invalid"));
        assert_eq!(body.error_code.as_deref(), Some("VALIDATION"));
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(BaitulMalError::NotFound("sector".into()))
            .expect("serializable");
        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "sector");
    }
}
