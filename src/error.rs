//! # Client Error Types
//!
//! Unified error handling for checked and unchecked API requests.

use anyhow::Result;
use thiserror::Error;

/// Client operation result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Error taxonomy for the request and validation layer
///
/// Every variant surfaces to the caller immediately; nothing is caught and
/// suppressed internally, and nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Programming error: a logical resource name that was never registered.
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// Checked mode only: the remote call did not return a success status.
    #[error("Unexpected status {status} for {operation}: {body}")]
    UnexpectedStatus {
        operation: String,
        status: u16,
        body: String,
    },

    /// Success status, but the body does not match the expected wire type.
    ///
    /// Distinct from an assertion failure: this signals contract drift with
    /// the remote API, not an intentionally probed failure scenario.
    #[error("Malformed response for {operation}: {reason}")]
    MalformedResponse { operation: String, reason: String },

    /// A response specification's predicate failed against an outcome.
    #[error("Response validation failed: {0}")]
    ValidationMismatch(String),

    /// Network or connection failure. Never retried by this crate.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Create an `UnexpectedStatus` error from a non-success response
    pub fn unexpected_status(
        operation: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        Self::UnexpectedStatus {
            operation: operation.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a `MalformedResponse` error for a contract break
    pub fn malformed_response(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Status code carried by the error, if any
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
