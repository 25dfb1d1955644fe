//! REST client for the Baitul Mal backend
//!
//! Adds the bearer token of the stored session to every request, decodes the
//! backend's error envelope and clears the session when the backend answers
//! 401.

use std::sync::Arc;
use std::time::Duration;

use baitulmal_core::SessionStore;
use baitulmal_domain::ApiConfig;
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::errors::ApiError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the backend (e.g. "https://baitulmal-production.up.railway.app")
    pub base_url: String,
    /// Timeout for API requests
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self { base_url: config.base_url.clone(), timeout: config.timeout() }
    }
}

/// API client bound to one backend and one session store
pub struct ApiClient {
    http_client: HttpClient,
    base_url: Url,
    sessions: Arc<dyn SessionStore>,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL cannot be parsed or the
    /// HTTP client cannot be built
    pub fn new(config: ApiClientConfig, sessions: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(|e| ApiError::Config(format!("Invalid API base URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!("API base URL cannot be a base: {base_url}")));
        }

        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(concat!("baitulmal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {e}")))?;

        Ok(Self { http_client, base_url, sessions })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `segments` below the base URL; each segment is percent-encoded
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let base = &self.base_url;
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Config(format!("API base URL cannot be a base: {base}")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Execute a GET request
    ///
    /// # Errors
    ///
    /// Returns error if request fails or response cannot be deserialized
    #[instrument(skip(self, query), fields(path = %segments.join("/")))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let mut url = self.endpoint(segments)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        self.execute(Method::GET, url, None::<&()>).await
    }

    /// Execute a POST request with a JSON body
    ///
    /// # Errors
    ///
    /// Returns error if request fails or response cannot be deserialized
    #[instrument(skip(self, body), fields(path = %segments.join("/")))]
    pub async fn post<B: Serialize + Sync, R: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<R, ApiError> {
        let url = self.endpoint(segments)?;
        self.execute(Method::POST, url, Some(body)).await
    }

    /// Execute a PUT request with a JSON body
    ///
    /// # Errors
    ///
    /// Returns error if request fails or response cannot be deserialized
    #[instrument(skip(self, body), fields(path = %segments.join("/")))]
    pub async fn put<B: Serialize + Sync, R: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<R, ApiError> {
        let url = self.endpoint(segments)?;
        self.execute(Method::PUT, url, Some(body)).await
    }

    async fn execute<B: Serialize + Sync, R: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<R, ApiError> {
        debug!(%method, url = %url, "API request");

        let mut request = self.http_client.request(method.clone(), url.clone());
        if let Some(token) = self.bearer_token() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.http_client.send(request).await.map_err(ApiError::from)?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            let err = ApiError::from_status(status, &bytes);
            if matches!(err, ApiError::Unauthorized(_)) {
                self.drop_session();
            }
            warn!(%method, url = %url, %status, error = %err, "API request failed");
            return Err(err);
        }

        let result = if bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::from_value(serde_json::Value::Null)
        } else {
            serde_json::from_slice(&bytes)
        }
        .map_err(|e| ApiError::Decode(format!("{status} from {url}: {e}")))?;

        info!(%method, path = url.path(), "API request successful");
        Ok(result)
    }

    fn bearer_token(&self) -> Option<String> {
        match self.sessions.load() {
            Ok(session) => session.map(|s| s.jwt).filter(|jwt| !jwt.is_empty()),
            Err(err) => {
                warn!(error = %err, "could not read stored session; sending anonymously");
                None
            }
        }
    }

    fn drop_session(&self) {
        match self.sessions.clear() {
            Ok(()) => info!("stored session cleared after 401"),
            Err(err) => warn!(error = %err, "failed to clear rejected session"),
        }
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    sessions: Option<Arc<dyn SessionStore>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the store the bearer token is read from
    pub fn sessions(mut self, sessions: Arc<dyn SessionStore>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if the session store is missing or client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let sessions =
            self.sessions.ok_or_else(|| ApiError::Config("Session store not set".to_string()))?;

        ApiClient::new(config, sessions)
    }
}
