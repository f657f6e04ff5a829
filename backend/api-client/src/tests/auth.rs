use crate::api_client::{ApiClient, AuthMode};
use crate::config::{AuthScheme, EndpointConfig};

use std::sync::Arc;

fn config() -> EndpointConfig {
    EndpointConfig::new("https://api.test").unwrap()
}

/// **VALUE**: Unauthenticated mode is observable without making a request.
#[test]
fn given_no_credential_when_auth_mode_checked_then_unauthenticated() {
    let client = ApiClient::new(Arc::new(config()));

    assert_eq!(client.auth_mode(), AuthMode::Unauthenticated);
    assert!(!client.auth_mode().is_authenticated());
}

#[test]
fn given_credential_and_scheme_when_auth_mode_checked_then_matches_scheme() {
    let bearer = config().with_credential("abc").with_auth_scheme(AuthScheme::Bearer);
    let header = config().with_credential("abc");
    let unknown = config()
        .with_credential("abc")
        .with_auth_scheme(AuthScheme::from_name("digest"));

    assert_eq!(AuthMode::from_config(&bearer), AuthMode::Bearer);
    assert_eq!(AuthMode::from_config(&header), AuthMode::ApiKeyHeader);
    assert_eq!(
        AuthMode::from_config(&unknown),
        AuthMode::Unrecognized(String::from("digest"))
    );
    assert!(!AuthMode::from_config(&unknown).is_authenticated());
}

/// **VALUE**: Debug output of the config never reveals the credential.
#[test]
fn given_config_with_credential_when_debug_formatted_then_secret_hidden() {
    let config = config().with_credential("very-secret");

    assert!(!format!("{config:?}").contains("very-secret"));
}

#[test]
fn given_new_client_when_created_then_disconnected() {
    let client = ApiClient::new(Arc::new(config()));

    assert!(!client.is_connected());
}
