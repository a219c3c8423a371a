//! Shared harness for integration tests: tracing init, a mock server bound
//! to a ready-made client config, and response builders matching the remote
//! API's envelope conventions.

use ci_api_testkit::config::ClientConfig;
use wiremock::{Match, MockServer, Request, ResponseTemplate};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}

/// Start a mock server and a config pointing the client at it
pub async fn harness() -> (MockServer, ClientConfig) {
    init_tracing();
    let server = MockServer::start().await;
    let config = ClientConfig {
        base_url: server.uri(),
        timeout_ms: 5000,
        superuser_token: Some("fixture-token".to_string()),
    };
    (server, config)
}

/// Plain-text error response, the remote's legacy envelope
pub fn text_response(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .insert_header("Content-Type", "text/plain; charset=UTF-8")
        .set_body_string(body)
}

/// Structured error response, the remote's JSON envelope
pub fn json_error_response(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .insert_header("Content-Type", "application/json")
        .set_body_json(serde_json::json!({"errors": [{"message": message}]}))
}

/// Matches only requests that carry no Authorization header
pub struct NoAuthHeader;

impl Match for NoAuthHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}
