//! End-to-end JSON-RPC exchanges over an in-memory stream.

use crate::helpers::{context_for, exchange, exchange_raw, unconfigured_context};

use changeanalysis_mcp::protocol::{JsonRpcError, PROTOCOL_VERSION};
use changeanalysis_mcp::server::McpServer;
use changeanalysis_mcp::SERVER_NAME;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: A client can complete the handshake and discover every tool.
#[tokio::test]
async fn given_handshake_when_served_then_initialize_and_tool_list_answered() {
    let server = McpServer::new(unconfigured_context());

    let responses = exchange(
        &server,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        ],
    )
    .await;

    assert_eq!(responses.len(), 2, "Notifications must not be answered");
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["result"]["protocolVersion"], PROTOCOL_VERSION);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], SERVER_NAME);
    assert_eq!(responses[1]["id"], 2);
    let tools = responses[1]["result"]["tools"].as_array().expect("tools array");
    assert_eq!(tools.len(), server.tool_count());
    assert!(tools.iter().any(|tool| tool["name"] == "list_change_requests"));
}

#[tokio::test]
async fn given_tools_call_when_served_then_text_content_returned() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/change-requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "CHG-1"}])))
        .mount(&api)
        .await;
    let server = McpServer::new(context_for(&api));

    let responses = exchange(
        &server,
        &[json!({
            "jsonrpc": "2.0",
            "id": "call-1",
            "method": "tools/call",
            "params": {"name": "list_change_requests", "arguments": {"status": "open"}}
        })],
    )
    .await;

    let result = &responses[0]["result"];
    assert_eq!(responses[0]["id"], "call-1");
    assert!(result.get("isError").is_none());
    assert_eq!(result["content"][0]["type"], "text");
    assert!(
        result["content"][0]["text"]
            .as_str()
            .expect("text content")
            .starts_with("Found 1 change request(s):")
    );
}

/// **VALUE**: Tool failures are tool results, not protocol errors.
#[tokio::test]
async fn given_unconfigured_server_when_tool_called_then_is_error_result() {
    let server = McpServer::new(unconfigured_context());

    let responses = exchange(
        &server,
        &[json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "tools/call",
            "params": {"name": "get_project", "arguments": {"project_id": "P-1"}}
        })],
    )
    .await;

    assert!(responses[0].get("error").is_none());
    assert_eq!(responses[0]["result"]["isError"], true);
}

#[tokio::test]
async fn given_unknown_tool_when_called_then_invalid_params() {
    let server = McpServer::new(unconfigured_context());

    let responses = exchange(
        &server,
        &[json!({
            "jsonrpc": "2.0",
            "id": 9,
            "method": "tools/call",
            "params": {"name": "greet"}
        })],
    )
    .await;

    assert_eq!(responses[0]["error"]["code"], JsonRpcError::INVALID_PARAMS);
    assert_eq!(responses[0]["error"]["message"], "Unknown tool: greet");
}

#[tokio::test]
async fn given_unknown_method_when_served_then_method_not_found() {
    let server = McpServer::new(unconfigured_context());

    let responses = exchange(
        &server,
        &[json!({"jsonrpc": "2.0", "id": 3, "method": "resources/list"})],
    )
    .await;

    assert_eq!(responses[0]["error"]["code"], JsonRpcError::METHOD_NOT_FOUND);
}

/// **VALUE**: Garbage input is answered with a parse error and the loop keeps going.
#[tokio::test]
async fn given_malformed_line_when_served_then_parse_error_and_loop_continues() {
    let server = McpServer::new(unconfigured_context());

    let responses = exchange_raw(
        &server,
        "{not json\n\n{\"jsonrpc\": \"2.0\", \"id\": 4, \"method\": \"ping\"}\n",
    )
    .await;

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["error"]["code"], JsonRpcError::PARSE_ERROR);
    assert!(responses[0]["id"].is_null());
    assert_eq!(responses[1]["id"], 4);
    assert_eq!(responses[1]["result"], json!({}));
}

#[tokio::test]
async fn given_wrong_jsonrpc_version_when_served_then_invalid_request() {
    let server = McpServer::new(unconfigured_context());

    let responses = exchange(&server, &[json!({"jsonrpc": "1.0", "id": 1, "method": "ping"})]).await;

    assert_eq!(responses[0]["error"]["code"], JsonRpcError::INVALID_REQUEST);
}
