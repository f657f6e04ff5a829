use crate::protocol::{CallToolResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse};

use serde_json::json;

#[test]
fn given_request_without_id_when_parsed_then_notification() {
    let request: JsonRpcRequest =
        serde_json::from_value(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
            .unwrap();

    assert!(request.is_notification());
    assert!(request.params.is_none());
}

/// **VALUE**: Successful tool results omit `isError`; failures set it.
#[test]
fn given_tool_results_when_serialized_then_is_error_only_on_failure() {
    let ok = serde_json::to_value(CallToolResult::text("fine")).unwrap();
    let failed = serde_json::to_value(CallToolResult::error("HTTP error occurred: 500 - boom")).unwrap();

    assert_eq!(ok, json!({"content": [{"type": "text", "text": "fine"}]}));
    assert_eq!(failed["isError"], true);
}

#[test]
fn given_error_response_when_serialized_then_result_omitted() {
    let response = JsonRpcResponse::error(json!(3), JsonRpcError::method_not_found("nope"));

    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["error"]["code"], JsonRpcError::METHOD_NOT_FOUND);
    assert!(value.get("result").is_none());
    assert_eq!(value["id"], 3);
}
