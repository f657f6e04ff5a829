use crate::helpers::{authenticated_config, config_for, mount_get_json};

use api_client::config::BASE_URL_KEY;
use api_client::{AuthScheme, ConfigError, HealthStatus, health_check};

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: A reachable API with data reports healthy plus the configuration.
#[tokio::test]
async fn given_reachable_api_when_health_checked_then_healthy_with_config_details() {
    let server = MockServer::start().await;
    mount_get_json(&server, "/change-requests", json!({"items": [{"id": "CHG-1"}]})).await;
    let config = Arc::new(authenticated_config(&server, AuthScheme::Bearer));

    let report = health_check(Ok(&config)).await;

    assert_eq!(report.status, HealthStatus::Healthy { records: 1 });
    assert_eq!(report.base_url.as_deref(), Some(server.uri().as_str()));
    assert_eq!(report.auth_scheme.as_deref(), Some("bearer"));
    assert!(report.credential_present);
    assert_eq!(report.timeout_secs, Some(5.0));
}

/// **VALUE**: 401/403 classify as "unauthenticated likely".
#[tokio::test]
async fn given_unauthorized_api_when_health_checked_then_unauthenticated_likely() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("missing key"))
        .mount(&server)
        .await;
    let config = Arc::new(config_for(&server));

    let report = health_check(Ok(&config)).await;

    assert_eq!(
        report.status,
        HealthStatus::UnauthenticatedLikely { http_status: 401 }
    );
    assert!(!report.credential_present);
    assert!(report.to_string().contains("unauthenticated"));
}

#[tokio::test]
async fn given_failing_api_when_health_checked_then_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;
    let config = Arc::new(config_for(&server));

    let report = health_check(Ok(&config)).await;

    assert_eq!(
        report.status,
        HealthStatus::UpstreamError {
            http_status: 503,
            body: String::from("maintenance"),
        }
    );
}

#[tokio::test]
async fn given_stopped_api_when_health_checked_then_unreachable() {
    let server = MockServer::start().await;
    let config = Arc::new(config_for(&server));
    drop(server);

    let report = health_check(Ok(&config)).await;

    assert!(
        matches!(report.status, HealthStatus::Unreachable { .. }),
        "{:?}",
        report.status
    );
}

/// **VALUE**: A failed configuration still produces a report, not an error.
#[tokio::test]
async fn given_missing_configuration_when_health_checked_then_configuration_missing() {
    let error = ConfigError::missing(BASE_URL_KEY);

    let report = health_check(Err(&error)).await;

    assert!(matches!(
        report.status,
        HealthStatus::ConfigurationMissing { ref reason } if reason.contains(BASE_URL_KEY)
    ));
    assert!(report.base_url.is_none());
    assert!(report.to_string().contains("configuration missing"));
}

#[tokio::test]
async fn given_report_when_serialized_then_status_tag_flattened() {
    let error = ConfigError::missing(BASE_URL_KEY);
    let report = health_check(Err(&error)).await;

    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["status"], "configuration_missing");
    assert_eq!(value["credential_present"], false);
}
