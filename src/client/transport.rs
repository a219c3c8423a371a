//! Shared HTTP transport for both request modes.
//!
//! Owns the HTTP client, the parsed base URL, and the auth context for the
//! duration of a call. One outgoing request per operation; transport-level
//! failures surface immediately and are never retried here.

use reqwest::{Client, Method, Url};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::auth::AuthContext;
use crate::config::ClientConfig;
use crate::endpoints::EndpointKind;
use crate::error::{ApiError, ApiResult};
use crate::outcome::RequestOutcome;

#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: Client,
    base_url: Url,
    auth: AuthContext,
}

impl Transport {
    pub(crate) fn new(config: &ClientConfig, auth: AuthContext) -> ApiResult<Self> {
        auth.validate()?;

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ApiError::config_error(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(format!("ci-api-testkit/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            auth,
        })
    }

    #[must_use]
    pub(crate) fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub(crate) fn collection_url(&self, endpoint: EndpointKind) -> ApiResult<Url> {
        self.base_url
            .join(endpoint.url())
            .map_err(|e| ApiError::config_error(format!("Failed to construct URL: {}", e)))
    }

    pub(crate) fn resource_url(&self, endpoint: EndpointKind, id: &str) -> ApiResult<Url> {
        self.base_url
            .join(&format!("{}/id:{}", endpoint.url(), id))
            .map_err(|e| ApiError::config_error(format!("Failed to construct URL: {}", e)))
    }

    /// Execute a single request and capture its outcome, whatever the status.
    pub(crate) async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        operation: String,
        body: Option<&B>,
    ) -> ApiResult<RequestOutcome> {
        debug!(
            url = %url,
            method = %method,
            authenticated = self.auth.is_authenticated(),
            "Dispatching {}",
            operation
        );

        let mut request = self.http.request(method, url);
        request = self.auth.apply(request);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        RequestOutcome::from_response(operation, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_is_a_configuration_error() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        let err = Transport::new(&config, AuthContext::unauthenticated()).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn test_resource_url_uses_id_locator() {
        let transport =
            Transport::new(&ClientConfig::default(), AuthContext::unauthenticated()).unwrap();
        let url = transport
            .resource_url(EndpointKind::Projects, "MyProject")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8111/app/rest/projects/id:MyProject"
        );
    }

    #[test]
    fn test_empty_credentials_rejected_at_construction() {
        let err = Transport::new(&ClientConfig::default(), AuthContext::user("", "")).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }
}
