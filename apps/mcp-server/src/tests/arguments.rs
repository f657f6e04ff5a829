use crate::error::ToolError;
use crate::tools::arguments::{filters, payload, required_str};

use api_client::ApiError;
use api_client::services::FeedbackFilters;

use serde_json::json;

#[test]
fn given_no_arguments_when_filters_read_then_defaults() {
    let parsed: FeedbackFilters = filters(&serde_json::Value::Null).unwrap();

    assert_eq!(parsed, FeedbackFilters::default());
}

/// **VALUE**: Callers use `source_system`, not the wire name.
#[test]
fn given_source_system_argument_when_filters_read_then_field_set() {
    let parsed: FeedbackFilters = filters(&json!({"source_system": "SAP", "unknown": 1})).unwrap();

    assert_eq!(parsed.source_system.as_deref(), Some("SAP"));
}

#[test]
fn given_wrongly_typed_filter_when_read_then_invalid_arguments() {
    let result: Result<FeedbackFilters, _> = filters(&json!({"status": 7}));

    assert!(matches!(result, Err(ToolError::InvalidArguments { .. })));
}

#[test]
fn given_id_arguments_when_read_then_trimmed_or_rejected() {
    assert_eq!(required_str(&json!({"change_id": " CHG-1 "}), "change_id").unwrap(), "CHG-1");
    assert_eq!(required_str(&json!({"system_id": 42}), "system_id").unwrap(), "42");
    assert!(required_str(&json!({"change_id": "  "}), "change_id").is_err());
    assert!(required_str(&json!({}), "change_id").is_err());
    assert!(required_str(&json!({"change_id": true}), "change_id").is_err());
}

/// **VALUE**: A malformed JSON body string is a Payload error before any request.
#[test]
fn given_malformed_payload_string_when_read_then_payload_error() {
    let result = payload(&json!({"data": "{not json"}));

    assert!(matches!(result, Err(ToolError::Api(ApiError::Payload { .. }))));
}

#[test]
fn given_payload_string_or_object_when_read_then_value_returned() {
    assert_eq!(
        payload(&json!({"data": "{\"title\": \"x\"}"})).unwrap(),
        json!({"title": "x"})
    );
    assert_eq!(payload(&json!({"data": {"title": "y"}})).unwrap(), json!({"title": "y"}));
    assert!(matches!(
        payload(&json!({})),
        Err(ToolError::InvalidArguments { .. })
    ));
}
