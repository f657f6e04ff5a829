use crate::RedactedApiKey;

/// **VALUE**: The credential never shows up in Debug or Display output.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug sneaking the key into
/// `{:?}` logging of the endpoint configuration.
#[test]
fn given_key_when_formatted_then_value_is_redacted() {
    let key = RedactedApiKey::new("super-secret-token");

    assert!(!format!("{key:?}").contains("super-secret-token"));
    assert!(!format!("{key}").contains("super-secret-token"));
    assert_eq!(key.as_str(), "super-secret-token");
    assert_eq!(key.len(), 18);
    assert!(!key.is_empty());
}

/// **VALUE**: Serializing a key is refused instead of leaking it.
#[test]
fn given_key_when_serialized_then_fails() {
    let key = RedactedApiKey::new("abc");

    let result = serde_json::to_string(&key);

    assert!(result.is_err(), "RedactedApiKey must refuse serialization");
}
