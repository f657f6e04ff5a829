//! Test helpers for API client integration tests.
//!
//! - Building endpoint configs pointed at a wiremock server
//! - Opening a service factory scope
//! - Inspecting what the mock server actually received

use api_client::{ApiServiceFactory, AuthScheme, EndpointConfig};

use std::sync::Arc;
use std::time::Duration;

use wiremock::MockServer;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

pub const TEST_CREDENTIAL: &str = "test-token-12345";

/// Config for `server` with no credential and a short timeout.
pub fn config_for(server: &MockServer) -> EndpointConfig {
    EndpointConfig::new(server.uri())
        .expect("mock server URI is a valid base URL")
        .with_timeout(Duration::from_secs(5))
        .expect("positive timeout")
}

pub fn authenticated_config(server: &MockServer, scheme: AuthScheme) -> EndpointConfig {
    config_for(server)
        .with_credential(TEST_CREDENTIAL)
        .with_auth_scheme(scheme)
}

/// A factory with its scope already open.
pub fn open_factory(config: EndpointConfig) -> ApiServiceFactory {
    let mut factory = ApiServiceFactory::new(Arc::new(config));
    factory.open().expect("Failed to open connection scope");
    factory
}

/// Mount a GET responder returning `body` as JSON.
pub async fn mount_get_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// The single request the server received.
pub async fn only_request(server: &MockServer) -> wiremock::Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1, "Expected exactly one request");
    requests.remove(0)
}
