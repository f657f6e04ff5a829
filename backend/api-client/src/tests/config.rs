// Unit tests for endpoint configuration resolution
// Uses in-memory sources so nothing touches the process environment

use crate::config::{
    AUTH_SCHEME_KEY, AuthScheme, BASE_URL_KEY, CREDENTIAL_KEY, DEFAULT_TIMEOUT, EndpointConfig,
    TIMEOUT_KEY,
};
use crate::error::ConfigError;

use std::collections::HashMap;
use std::time::Duration;

fn source(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    pairs.iter().copied().collect()
}

/// **VALUE**: Only the base URL is mandatory; everything else has a default.
///
/// **BUG THIS CATCHES**: Would catch a default timeout or auth scheme drifting
/// from 30 seconds / `x-api-key`.
#[test]
fn given_only_base_url_when_resolved_then_defaults_apply() {
    let config = EndpointConfig::resolve(&source(&[(BASE_URL_KEY, "https://api.test")])).unwrap();

    assert_eq!(config.base_url(), "https://api.test");
    assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.auth_scheme(), &AuthScheme::ApiKeyHeader);
    assert!(!config.has_credential(), "No credential means unauthenticated mode");
}

/// **VALUE**: A missing base URL fails closed and names the key.
#[test]
fn given_no_base_url_when_resolved_then_missing_error_names_key() {
    let result = EndpointConfig::resolve(&source(&[(CREDENTIAL_KEY, "abc")]));

    match result {
        Err(ConfigError::Missing { key, .. }) => assert_eq!(key, BASE_URL_KEY),
        other => panic!("Expected Missing error, got {other:?}"),
    }
}

/// **VALUE**: A blank base URL is treated the same as an absent one.
#[test]
fn given_blank_base_url_when_resolved_then_missing_error() {
    let result = EndpointConfig::resolve(&source(&[(BASE_URL_KEY, "   ")]));

    assert!(matches!(result, Err(ConfigError::Missing { .. })));
}

#[test]
fn given_relative_base_url_when_resolved_then_invalid_error() {
    let result = EndpointConfig::resolve(&source(&[(BASE_URL_KEY, "api.test/v1")]));

    assert!(matches!(result, Err(ConfigError::Invalid { ref key, .. }) if key == BASE_URL_KEY));
}

/// **VALUE**: Fractional timeouts are accepted as seconds.
#[test]
fn given_fractional_timeout_when_resolved_then_duration_matches() {
    let config = EndpointConfig::resolve(&source(&[
        (BASE_URL_KEY, "https://api.test"),
        (TIMEOUT_KEY, "2.5"),
    ]))
    .unwrap();

    assert_eq!(config.timeout(), Duration::from_millis(2500));
}

/// **VALUE**: Timeouts that are not positive numbers are rejected, not defaulted.
///
/// **BUG THIS CATCHES**: Would catch a silent fallback to 30s that hides a typo.
#[test]
fn given_bad_timeouts_when_resolved_then_invalid_error() {
    for raw in ["abc", "0", "-5", "NaN", "inf"] {
        let mut pairs = HashMap::new();
        pairs.insert(BASE_URL_KEY, "https://api.test");
        pairs.insert(TIMEOUT_KEY, raw);

        let result = EndpointConfig::resolve(&pairs);

        assert!(
            matches!(result, Err(ConfigError::Invalid { ref key, .. }) if key == TIMEOUT_KEY),
            "timeout '{raw}' should be rejected, got {result:?}"
        );
    }
}

/// **VALUE**: Both scheme spellings and the alias resolve, case-insensitively.
#[test]
fn given_auth_scheme_names_when_resolved_then_mapped_to_scheme() {
    let cases = [
        ("bearer", AuthScheme::Bearer),
        ("Bearer", AuthScheme::Bearer),
        ("x-api-key", AuthScheme::ApiKeyHeader),
        ("X-API-KEY", AuthScheme::ApiKeyHeader),
        ("header-key", AuthScheme::ApiKeyHeader),
    ];

    for (raw, expected) in cases {
        let mut pairs = HashMap::new();
        pairs.insert(BASE_URL_KEY, "https://api.test");
        pairs.insert(AUTH_SCHEME_KEY, raw);

        let config = EndpointConfig::resolve(&pairs).unwrap();

        assert_eq!(config.auth_scheme(), &expected, "scheme '{raw}'");
    }
}

#[test]
fn given_unknown_auth_scheme_when_resolved_then_invalid_error() {
    let result = EndpointConfig::resolve(&source(&[
        (BASE_URL_KEY, "https://api.test"),
        (AUTH_SCHEME_KEY, "basic"),
    ]));

    assert!(matches!(result, Err(ConfigError::Invalid { ref key, .. }) if key == AUTH_SCHEME_KEY));
}

/// **VALUE**: A blank credential downgrades to unauthenticated instead of
/// sending an empty auth header.
#[test]
fn given_blank_credential_when_resolved_then_no_credential() {
    let config = EndpointConfig::resolve(&source(&[
        (BASE_URL_KEY, "https://api.test"),
        (CREDENTIAL_KEY, "  "),
    ]))
    .unwrap();

    assert!(!config.has_credential());
}

/// **VALUE**: Resolution is pure: same input, same output.
#[test]
fn given_same_source_when_resolved_twice_then_results_match() {
    let pairs = source(&[
        (BASE_URL_KEY, "https://api.test"),
        (CREDENTIAL_KEY, "abc"),
        (AUTH_SCHEME_KEY, "bearer"),
        (TIMEOUT_KEY, "5"),
    ]);

    let first = EndpointConfig::resolve(&pairs).unwrap();
    let second = EndpointConfig::resolve(&pairs).unwrap();

    assert_eq!(first.base_url(), second.base_url());
    assert_eq!(first.timeout(), second.timeout());
    assert_eq!(first.auth_scheme(), second.auth_scheme());
    assert_eq!(first.credential(), second.credential());
}

#[test]
fn given_zero_timeout_when_built_programmatically_then_rejected() {
    let result = EndpointConfig::new("https://api.test")
        .unwrap()
        .with_timeout(Duration::ZERO);

    assert!(result.is_err());
}

/// **VALUE**: The lenient parser keeps unknown names so the transport can warn.
#[test]
fn given_unknown_name_when_parsed_leniently_then_unrecognized_kept() {
    assert_eq!(AuthScheme::parse("digest"), None);
    assert_eq!(
        AuthScheme::from_name("digest"),
        AuthScheme::Unrecognized(String::from("digest"))
    );
    assert_eq!(AuthScheme::from_name("bearer"), AuthScheme::Bearer);
}
