//! # Authentication Contexts
//!
//! A request authenticates in one of three modes: not at all, as a
//! credentialed user, or as the superuser. The context is immutable and its
//! only observable effect is the header it attaches to an outgoing request.

use reqwest::RequestBuilder;

use crate::error::{ApiError, ApiResult};

/// How a request authenticates against the server under test
///
/// Invariant: the unauthenticated context carries no credential payload;
/// credentialed contexts must carry a non-empty one (checked when a request
/// client is constructed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthContext {
    /// No credentials attached; only guest-accessible routes succeed.
    Unauthenticated,
    /// Basic-auth user credentials.
    User { username: String, password: String },
    /// Privileged token bypassing ordinary permission checks, used to seed fixtures.
    Superuser { token: String },
}

impl AuthContext {
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated
    }

    pub fn user(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::User {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn superuser(token: impl Into<String>) -> Self {
        Self::Superuser {
            token: token.into(),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Unauthenticated)
    }

    /// Enforce the non-empty credential payload invariant
    pub(crate) fn validate(&self) -> ApiResult<()> {
        match self {
            Self::Unauthenticated => Ok(()),
            Self::User { username, password } => {
                if username.is_empty() || password.is_empty() {
                    Err(ApiError::config_error(
                        "User auth context requires a non-empty username and password",
                    ))
                } else {
                    Ok(())
                }
            }
            Self::Superuser { token } => {
                if token.is_empty() {
                    Err(ApiError::config_error(
                        "Superuser auth context requires a non-empty token",
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Attach this context's credentials to an outgoing request
    pub(crate) fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Unauthenticated => request,
            Self::User { username, password } => request.basic_auth(username, Some(password)),
            Self::Superuser { token } => request.bearer_auth(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_carries_no_payload() {
        let context = AuthContext::unauthenticated();
        assert!(!context.is_authenticated());
        assert!(context.validate().is_ok());
    }

    #[test]
    fn test_user_context_requires_credentials() {
        assert!(AuthContext::user("alice", "secret").validate().is_ok());
        assert!(AuthContext::user("", "secret").validate().is_err());
        assert!(AuthContext::user("alice", "").validate().is_err());
    }

    #[test]
    fn test_superuser_context_requires_token() {
        assert!(AuthContext::superuser("token").validate().is_ok());
        assert!(AuthContext::superuser("").validate().is_err());
    }
}
