// Tests that touch the real process environment run serially

use api_client::config::{AUTH_SCHEME_KEY, BASE_URL_KEY, CREDENTIAL_KEY, TIMEOUT_KEY};
use api_client::{AuthScheme, ConfigError, EndpointConfig, ProcessEnv};

use std::time::Duration;

use serial_test::serial;

fn clear_env() {
    for key in [BASE_URL_KEY, CREDENTIAL_KEY, TIMEOUT_KEY, AUTH_SCHEME_KEY] {
        // SAFETY: serialized test, no other threads read the environment concurrently
        unsafe { std::env::remove_var(key) };
    }
}

/// **VALUE**: The process environment is read through the same resolver.
#[test]
#[serial]
fn given_process_env_when_resolved_then_values_applied() {
    clear_env();
    // SAFETY: serialized test
    unsafe {
        std::env::set_var(BASE_URL_KEY, "https://api.test");
        std::env::set_var(CREDENTIAL_KEY, "abc");
        std::env::set_var(TIMEOUT_KEY, "12");
        std::env::set_var(AUTH_SCHEME_KEY, "bearer");
    }

    let config = EndpointConfig::resolve(&ProcessEnv).unwrap();

    assert_eq!(config.base_url(), "https://api.test");
    assert_eq!(config.timeout(), Duration::from_secs(12));
    assert_eq!(config.auth_scheme(), &AuthScheme::Bearer);
    assert_eq!(config.credential().map(|c| c.as_str()), Some("abc"));
    clear_env();
}

#[test]
#[serial]
fn given_empty_process_env_when_resolved_then_missing_base_url() {
    clear_env();

    let result = EndpointConfig::resolve(&ProcessEnv);

    assert!(matches!(result, Err(ConfigError::Missing { ref key, .. }) if key == BASE_URL_KEY));
}
