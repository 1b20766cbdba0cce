//! Rootly REST API client.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::alert::NewAlert;
use crate::diagnostics::Diagnostics;
use crate::error::AlertError;
use crate::resolvers::EntityKind;

/// Base URL for the Rootly API.
pub const API_BASE_URL: &str = "https://api.rootly.com";

/// Content type Rootly expects on JSON:API request bodies.
pub const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Operations the alert action needs from Rootly.
///
/// Both operations absorb soft failures: they report through the client's
/// diagnostics and return an empty identifier instead of an error.
#[async_trait]
pub trait RootlyApi: Send + Sync {
    /// Resolve a display name of `kind` to its identifier, or `""`.
    async fn resolve_id(&self, kind: EntityKind, name: &str) -> String;

    /// Create an alert and return its identifier, or `""`.
    async fn create_alert(&self, alert: &NewAlert) -> String;
}

/// Authenticated Rootly API client.
#[derive(Clone)]
pub struct RootlyClient {
    /// HTTP client.
    client: Client,
    /// Bearer token.
    api_key: String,
    /// Scheme and host, without a trailing slash.
    base_url: String,
    /// Sink for not-found and transport diagnostics.
    diagnostics: Arc<dyn Diagnostics>,
}

impl RootlyClient {
    /// Create a client against the public Rootly API.
    ///
    /// # Errors
    /// Returns error if the API key is blank or the HTTP client cannot be created.
    pub fn new(
        api_key: impl Into<String>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Result<Self, AlertError> {
        Self::with_base_url(API_BASE_URL, api_key, diagnostics)
    }

    /// Create a client against a specific API host.
    ///
    /// # Errors
    /// Returns error if the API key is blank or the HTTP client cannot be created.
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Result<Self, AlertError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AlertError::Config("api_key is required".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            diagnostics,
        })
    }

    /// API host this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Diagnostics sink used for soft failures.
    #[must_use]
    pub fn diagnostics(&self) -> &dyn Diagnostics {
        self.diagnostics.as_ref()
    }

    /// Make an authenticated GET request. `path` already carries its query.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, AlertError> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "GET request");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Make an authenticated POST request with a pre-serialized JSON:API body.
    pub(crate) async fn post<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: String,
    ) -> Result<T, AlertError> {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "POST request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", JSON_API_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Handle API response, parsing JSON or error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AlertError> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str(&text).map_err(|e| {
                warn!(error = %e, body = %text, "Failed to parse response");
                AlertError::Serialization(e)
            })
        } else {
            debug!(status = status.as_u16(), body = %text, "API error response");
            Err(AlertError::Api {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            })
        }
    }
}

#[async_trait]
impl RootlyApi for RootlyClient {
    async fn resolve_id(&self, kind: EntityKind, name: &str) -> String {
        RootlyClient::resolve_id(self, kind, name).await
    }

    async fn create_alert(&self, alert: &NewAlert) -> String {
        RootlyClient::create_alert(self, alert).await
    }
}

impl fmt::Debug for RootlyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootlyClient")
            .field("base_url", &self.base_url)
            .field("api_key_len", &self.api_key.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingDiagnostics;

    #[test]
    fn test_rejects_blank_api_key() {
        let result = RootlyClient::new("  ", Arc::new(RecordingDiagnostics::new()));
        assert!(matches!(result, Err(AlertError::Config(_))));
    }

    #[test]
    fn test_trims_trailing_slash() {
        let client = RootlyClient::with_base_url(
            "http://localhost:8080/",
            "key",
            Arc::new(RecordingDiagnostics::new()),
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client =
            RootlyClient::new("secret-token", Arc::new(RecordingDiagnostics::new())).unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("api_key_len: 12"));
    }
}
