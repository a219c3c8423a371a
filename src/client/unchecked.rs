//! # Unchecked Request Mode
//!
//! Every call returns the raw [`RequestOutcome`] regardless of status code.
//! This mode exists for the large share of scenarios that intentionally probe
//! failure paths and need the exact status and body, without the checked
//! mode's fail-fast behavior. Only transport-level failures error here.

use reqwest::Method;
use serde::Serialize;

use super::transport::Transport;
use crate::auth::AuthContext;
use crate::config::ClientConfig;
use crate::endpoints::EndpointKind;
use crate::error::ApiResult;
use crate::outcome::RequestOutcome;

/// CRUD surface returning raw outcomes for external assertion
#[derive(Debug, Clone)]
pub struct UncheckedClient {
    transport: Transport,
}

impl UncheckedClient {
    /// Create a client bound to an auth context for the duration of its calls
    pub fn new(config: &ClientConfig, auth: AuthContext) -> ApiResult<Self> {
        Ok(Self {
            transport: Transport::new(config, auth)?,
        })
    }

    pub(crate) fn from_transport(transport: Transport) -> Self {
        Self { transport }
    }

    /// Get the configured base URL for debugging/logging
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// POST the body to the endpoint's collection URL
    ///
    /// The body is any serializable value, so malformed and partial payloads
    /// can be probed as easily as well-formed models.
    pub async fn create<B: Serialize + ?Sized>(
        &self,
        endpoint: EndpointKind,
        body: &B,
    ) -> ApiResult<RequestOutcome> {
        let url = self.transport.collection_url(endpoint)?;
        self.transport
            .execute(Method::POST, url, format!("create {}", endpoint), Some(body))
            .await
    }

    /// GET a single resource by its `id:` locator
    pub async fn read(&self, endpoint: EndpointKind, id: &str) -> ApiResult<RequestOutcome> {
        let url = self.transport.resource_url(endpoint, id)?;
        self.transport
            .execute::<()>(Method::GET, url, format!("read {}", endpoint), None)
            .await
    }

    /// PUT the body to a single resource's locator URL
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        endpoint: EndpointKind,
        id: &str,
        body: &B,
    ) -> ApiResult<RequestOutcome> {
        let url = self.transport.resource_url(endpoint, id)?;
        self.transport
            .execute(Method::PUT, url, format!("update {}", endpoint), Some(body))
            .await
    }

    /// DELETE a single resource by its `id:` locator
    pub async fn delete(&self, endpoint: EndpointKind, id: &str) -> ApiResult<RequestOutcome> {
        let url = self.transport.resource_url(endpoint, id)?;
        self.transport
            .execute::<()>(Method::DELETE, url, format!("delete {}", endpoint), None)
            .await
    }
}
