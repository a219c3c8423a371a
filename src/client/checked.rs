//! # Checked Request Mode
//!
//! Asserts success and deserializes into the descriptor's wire type, failing
//! hard otherwise. Wraps the unchecked client so both modes share one
//! transport and serialization path; the two differ only in how a
//! non-success status is handled.

use tracing::info;

use super::transport::Transport;
use super::unchecked::UncheckedClient;
use crate::auth::AuthContext;
use crate::config::ClientConfig;
use crate::endpoints::Endpoint;
use crate::error::ApiResult;
use crate::models::ApiModel;

/// CRUD surface returning fully-typed entities, or failing with
/// [`UnexpectedStatus`](crate::error::ApiError::UnexpectedStatus)
#[derive(Debug, Clone)]
pub struct CheckedClient {
    inner: UncheckedClient,
}

impl CheckedClient {
    /// Create a client bound to an auth context for the duration of its calls
    pub fn new(config: &ClientConfig, auth: AuthContext) -> ApiResult<Self> {
        Ok(Self {
            inner: UncheckedClient::from_transport(Transport::new(config, auth)?),
        })
    }

    /// The unchecked view over the same transport and auth context
    #[must_use]
    pub fn unchecked(&self) -> &UncheckedClient {
        &self.inner
    }

    /// Get the configured base URL for debugging/logging
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    /// Create an entity and return the server's snapshot of it
    pub async fn create<M: ApiModel>(&self, endpoint: &Endpoint<M>, entity: &M) -> ApiResult<M> {
        let outcome = self.inner.create(endpoint.kind(), entity).await?;
        let created: M = outcome.into_entity()?;
        info!(
            endpoint = endpoint.name(),
            id = created.id(),
            "Created entity"
        );
        Ok(created)
    }

    /// Read an entity by its stable identifier
    pub async fn read<M: ApiModel>(&self, endpoint: &Endpoint<M>, id: &str) -> ApiResult<M> {
        let outcome = self.inner.read(endpoint.kind(), id).await?;
        outcome.into_entity()
    }

    /// Replace an entity and return the server's snapshot of it
    pub async fn update<M: ApiModel>(
        &self,
        endpoint: &Endpoint<M>,
        id: &str,
        entity: &M,
    ) -> ApiResult<M> {
        let outcome = self.inner.update(endpoint.kind(), id, entity).await?;
        outcome.into_entity()
    }

    /// Delete an entity by its stable identifier
    ///
    /// The remote returns an empty body on success, so there is no entity to
    /// hand back.
    pub async fn delete<M: ApiModel>(&self, endpoint: &Endpoint<M>, id: &str) -> ApiResult<()> {
        let outcome = self.inner.delete(endpoint.kind(), id).await?;
        outcome.expect_success()?;
        info!(endpoint = endpoint.name(), id = id, "Deleted entity");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_and_unchecked_share_one_transport() {
        let client =
            CheckedClient::new(&ClientConfig::default(), AuthContext::unauthenticated()).unwrap();
        assert_eq!(client.base_url(), client.unchecked().base_url());
    }
}
