use crate::HttpStatusCode;

/// **VALUE**: 401 and 403 are the only statuses the health check reads as
/// "credential problem".
#[test]
fn given_auth_statuses_when_classified_then_only_401_and_403_are_auth_failures() {
    assert!(HttpStatusCode(401).is_auth_failure());
    assert!(HttpStatusCode(403).is_auth_failure());
    assert!(!HttpStatusCode(404).is_auth_failure());
    assert!(!HttpStatusCode(500).is_auth_failure());
}

/// **VALUE**: The transport treats every status >= 400 as failure and 204 as empty.
#[test]
fn given_statuses_when_classified_then_failure_and_no_content_boundaries_hold() {
    assert!(!HttpStatusCode(399).is_failure());
    assert!(HttpStatusCode(400).is_failure());
    assert!(HttpStatusCode(599).is_failure());
    assert!(HttpStatusCode(204).is_no_content());
    assert!(!HttpStatusCode(200).is_no_content());
    assert!(HttpStatusCode(404).is_client_error());
    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(503).is_client_error());
}

#[test]
fn given_status_when_displayed_then_renders_bare_number() {
    assert_eq!(HttpStatusCode::from(500).to_string(), "500");
}
