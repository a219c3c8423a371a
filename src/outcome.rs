//! # Request Outcomes
//!
//! Raw result of a single API call: status, headers, and the unparsed body.
//! Outcomes are created per call and discarded after assertion; the checked
//! request mode layers its success gate and deserialization on top.

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Everything a test needs to assert on a response
#[derive(Debug, Clone)]
pub struct RequestOutcome {
    operation: String,
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl RequestOutcome {
    /// Build an outcome directly; useful for asserting specifications
    /// against hand-made responses.
    pub fn new(
        operation: impl Into<String>,
        status: StatusCode,
        headers: HeaderMap,
        body: impl Into<String>,
    ) -> Self {
        Self {
            operation: operation.into(),
            status,
            headers,
            body: body.into(),
        }
    }

    /// Capture a live response; reading the body is the only await point.
    pub(crate) async fn from_response(operation: String, response: Response) -> ApiResult<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self {
            operation,
            status,
            headers,
            body,
        })
    }

    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body, unparsed
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Media-type essence of the Content-Type header, parameters stripped
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.split(';').next().unwrap_or(value).trim())
    }

    /// Parse the body as JSON
    pub fn json(&self) -> ApiResult<Value> {
        serde_json::from_str(&self.body)
            .map_err(|e| ApiError::malformed_response(&self.operation, e.to_string()))
    }

    /// Deserialize the body into a wire type, regardless of status
    pub fn deserialize<M: DeserializeOwned>(&self) -> ApiResult<M> {
        serde_json::from_str(&self.body)
            .map_err(|e| ApiError::malformed_response(&self.operation, e.to_string()))
    }

    /// Checked-mode gate: pass the outcome through only on a success status
    pub fn expect_success(self) -> ApiResult<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(ApiError::unexpected_status(
                self.operation,
                self.status.as_u16(),
                self.body,
            ))
        }
    }

    /// Checked-mode result: success gate plus deserialization
    ///
    /// A parse failure after a success status is a contract break with the
    /// remote API and surfaces as [`ApiError::MalformedResponse`].
    pub fn into_entity<M: DeserializeOwned>(self) -> ApiResult<M> {
        let outcome = self.expect_success()?;
        outcome.deserialize()
    }
}
