use crate::error::{ApiError, ConfigError};

/// **VALUE**: Each error kind has a stable label for callers that branch on it.
#[test]
fn given_each_error_variant_when_kind_checked_then_label_is_stable() {
    assert_eq!(ApiError::from(ConfigError::missing("X")).kind(), "configuration");
    assert_eq!(ApiError::not_ready("x").kind(), "not_ready");
    assert_eq!(ApiError::http_status(500, "boom").kind(), "http_status");
    assert_eq!(ApiError::transport("x").kind(), "transport");
    assert_eq!(ApiError::payload("x").kind(), "payload");
    assert_eq!(ApiError::invalid_identifier("..").kind(), "invalid_identifier");
}

/// **VALUE**: HTTP errors keep status and body verbatim.
#[test]
fn given_http_status_error_when_inspected_then_status_and_body_preserved() {
    let error = ApiError::http_status(403, "forbidden");

    assert_eq!(error.status_code(), Some(403));
    assert!(error.is_auth_failure());
    assert_eq!(error.detail(), "403 - forbidden");
    assert!(error.to_string().contains("403 - forbidden"));
}

#[test]
fn given_non_http_error_when_status_checked_then_none() {
    assert_eq!(ApiError::transport("dns").status_code(), None);
    assert!(!ApiError::transport("dns").is_auth_failure());
}

#[test]
fn given_config_error_when_reason_read_then_location_excluded() {
    let error = ConfigError::invalid("KEY", "v", "bad");

    assert_eq!(error.reason(), "KEY='v': bad");
    assert_eq!(error.key(), "KEY");
    assert!(error.to_string().contains(".rs:"), "Display carries the location");
}
