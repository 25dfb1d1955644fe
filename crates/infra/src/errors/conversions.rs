//! Conversions from external infrastructure errors into domain errors.

use baitulmal_domain::BaitulMalError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub BaitulMalError);

impl From<InfraError> for BaitulMalError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<BaitulMalError> for InfraError {
    fn from(value: BaitulMalError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoBaitulMalError {
    fn into_baitulmal(self) -> BaitulMalError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → BaitulMalError */
/* -------------------------------------------------------------------------- */

impl IntoBaitulMalError for HttpError {
    fn into_baitulmal(self) -> BaitulMalError {
        if self.is_timeout() {
            return BaitulMalError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return BaitulMalError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return BaitulMalError::Internal(format!("unexpected response body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 => BaitulMalError::Unauthorized(message),
                404 => BaitulMalError::NotFound(message),
                400..=499 => BaitulMalError::InvalidInput(message),
                _ => BaitulMalError::Network(message),
            };
        }

        BaitulMalError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_baitulmal())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → BaitulMalError */
/* -------------------------------------------------------------------------- */

impl IntoBaitulMalError for JsonError {
    fn into_baitulmal(self) -> BaitulMalError {
        if self.is_io() {
            BaitulMalError::Storage(format!("failed to read JSON: {self}"))
        } else {
            BaitulMalError::Internal(format!("malformed JSON at line {}: {self}", self.line()))
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_baitulmal())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → BaitulMalError */
/* -------------------------------------------------------------------------- */

impl IntoBaitulMalError for std::io::Error {
    fn into_baitulmal(self) -> BaitulMalError {
        match self.kind() {
            std::io::ErrorKind::NotFound => BaitulMalError::NotFound(self.to_string()),
            std::io::ErrorKind::PermissionDenied => {
                BaitulMalError::Storage(format!("permission denied: {self}"))
            }
            _ => BaitulMalError::Storage(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_baitulmal())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn malformed_json_maps_to_internal_error() {
        let err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let mapped: BaitulMalError = InfraError::from(err).into();
        match mapped {
            BaitulMalError::Internal(msg) => assert!(msg.contains("line 1")),
            other => panic!("expected internal error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "state.json");
        let mapped: BaitulMalError = InfraError::from(err).into();
        assert!(matches!(mapped, BaitulMalError::NotFound(_)));
    }

    #[tokio::test]
    async fn http_status_401_maps_to_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error =
            client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

        let mapped: BaitulMalError = InfraError::from(error).into();
        match mapped {
            BaitulMalError::Unauthorized(msg) => assert!(msg.contains("401")),
            other => panic!("expected unauthorized, got {:?}", other),
        }
    }
}
