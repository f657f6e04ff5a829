// Unit tests for list response normalization

use crate::services::{ResponseShape, normalize_collection, parse_payload};

use serde_json::json;

/// **VALUE**: A bare array comes back unchanged.
#[test]
fn given_bare_array_when_normalized_then_returned_unchanged() {
    let records = normalize_collection(json!([{"id": "CHG-1"}, {"id": "CHG-2"}]));

    assert_eq!(records, vec![json!({"id": "CHG-1"}), json!({"id": "CHG-2"})]);
}

/// **VALUE**: An `items` envelope is unwrapped.
#[test]
fn given_items_envelope_when_normalized_then_inner_array_returned() {
    let value = json!({"items": [{"id": "CHG-1"}], "total": 1});

    assert!(matches!(ResponseShape::from(value.clone()), ResponseShape::Envelope(_)));
    assert_eq!(normalize_collection(value), vec![json!({"id": "CHG-1"})]);
}

/// **VALUE**: A single object becomes a one-element collection, untouched.
///
/// **BUG THIS CATCHES**: Would catch callers receiving a bare object where
/// they iterate a list.
#[test]
fn given_single_object_when_normalized_then_wrapped_in_one_element_list() {
    let record = json!({"id": "CHG-1", "title": "Upgrade DB"});

    assert_eq!(normalize_collection(record.clone()), vec![record]);
}

#[test]
fn given_empty_array_when_normalized_then_empty() {
    assert!(normalize_collection(json!([])).is_empty());
}

#[test]
fn given_null_items_envelope_when_normalized_then_empty() {
    assert!(normalize_collection(json!({"items": null})).is_empty());
}

#[test]
fn given_non_array_items_when_normalized_then_single_element() {
    assert_eq!(
        normalize_collection(json!({"items": {"id": "P-1"}})),
        vec![json!({"id": "P-1"})]
    );
}

#[test]
fn given_valid_json_text_when_parsed_then_value_returned() {
    let body = parse_payload(r#"{"title": "Patch kernel", "priority": "high"}"#).unwrap();

    assert_eq!(body["title"], "Patch kernel");
}

/// **VALUE**: Bad caller JSON is a Payload error carrying the parser detail.
#[test]
fn given_malformed_json_text_when_parsed_then_payload_error() {
    let error = parse_payload("{title: nope").unwrap_err();

    assert_eq!(error.kind(), "payload");
    assert!(error.detail().contains("line 1"), "detail: {}", error.detail());
}
