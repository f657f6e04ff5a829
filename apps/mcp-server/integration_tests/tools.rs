//! Tool dispatch against a wiremock-backed API.

use crate::helpers::{call, context_for, unconfigured_context};

use changeanalysis_mcp::tools::call_tool;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: list tools translate caller filter names and normalize envelopes.
///
/// **BUG THIS CATCHES**: Would catch `source_system` being sent verbatim
/// instead of `sourceSystem`.
#[tokio::test]
async fn given_feedback_filters_when_list_tool_called_then_wire_names_and_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-feedback"))
        .and(query_param("sourceSystem", "SAP"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"items": [{"id": "F-1"}], "total": 1})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = call(
        &context_for(&server),
        "list_feedback",
        json!({"source_system": "SAP", "status": "  "}),
    )
    .await;

    assert!(!result.is_error, "{}", result.joined_text());
    let text = result.joined_text();
    assert!(text.starts_with("Found 1 feedback item(s):"));
    assert!(text.contains("\"F-1\""));
}

#[tokio::test]
async fn given_empty_collection_when_list_tool_called_then_no_records_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let result = call(&context_for(&server), "list_projects", json!({})).await;

    assert!(!result.is_error);
    assert_eq!(result.joined_text(), "No project records found");
}

/// **VALUE**: HTTP failures surface as tool errors with status and body.
#[tokio::test]
async fn given_server_error_when_get_tool_called_then_http_error_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/systems/SYS-9"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = call(&context_for(&server), "get_system", json!({"system_id": "SYS-9"})).await;

    assert!(result.is_error);
    assert_eq!(result.joined_text(), "HTTP error occurred: 500 - boom");
}

/// **VALUE**: A malformed payload is rejected before any request is sent.
#[tokio::test]
async fn given_malformed_payload_when_create_tool_called_then_no_request_sent() {
    let server = MockServer::start().await;

    let result = call(
        &context_for(&server),
        "create_change_request",
        json!({"data": "{\"title\": "}),
    )
    .await;

    assert!(result.is_error);
    assert!(result.joined_text().starts_with("Invalid JSON payload: "));
    let received = server.received_requests().await.expect("recording enabled");
    assert!(received.is_empty());
}

#[tokio::test]
async fn given_valid_payload_when_update_tool_called_then_patch_sent() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/change-requests/CHG-7"))
        .and(body_json(json!({"status": "closed"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "CHG-7", "status": "closed"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = call(
        &context_for(&server),
        "update_change_request",
        json!({"change_id": "CHG-7", "data": "{\"status\": \"closed\"}"}),
    )
    .await;

    assert!(!result.is_error, "{}", result.joined_text());
    assert!(result.joined_text().starts_with("Updated change request CHG-7:"));
}

#[tokio::test]
async fn given_no_content_when_delete_tool_called_then_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/get-projects/P-3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let result = call(&context_for(&server), "delete_project", json!({"project_id": "P-3"})).await;

    assert!(!result.is_error, "{}", result.joined_text());
    assert_eq!(result.joined_text(), "Deleted project P-3");
}

#[tokio::test]
async fn given_change_request_when_approve_tool_called_then_post_to_approve_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/change-requests/CHG-2/approve"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "CHG-2", "status": "approved"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = call(&context_for(&server), "approve_change_request", json!({"change_id": "CHG-2"})).await;

    assert!(!result.is_error, "{}", result.joined_text());
    assert!(result.joined_text().contains("approved"));
}

/// **VALUE**: analyze_change searches change requests by the given text.
#[tokio::test]
async fn given_change_text_when_analyze_called_then_search_filter_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/change-requests"))
        .and(query_param("search", "CHG-100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": null})))
        .expect(1)
        .mount(&server)
        .await;

    let result = call(&context_for(&server), "analyze_change", json!({"change": "CHG-100"})).await;

    assert!(!result.is_error);
    assert_eq!(result.joined_text(), "No change requests found for 'CHG-100'");
}

#[tokio::test]
async fn given_missing_id_when_get_tool_called_then_invalid_arguments() {
    let server = MockServer::start().await;

    let result = call(&context_for(&server), "get_feedback", json!({})).await;

    assert!(result.is_error);
    assert_eq!(
        result.joined_text(),
        "Invalid arguments: missing required argument 'feedback_id'"
    );
}

/// **VALUE**: Without a base URL every API tool reports the configuration problem.
#[tokio::test]
async fn given_unresolved_config_when_tool_called_then_configuration_error() {
    let result = call(&unconfigured_context(), "list_systems", json!({})).await;

    assert!(result.is_error);
    assert_eq!(
        result.joined_text(),
        "Configuration error: CHANGEANALYSIS_API_BASE_URL is not set"
    );
}

#[tokio::test]
async fn given_unresolved_config_when_health_check_called_then_report_not_error() {
    let result = call(&unconfigured_context(), "health_check", json!({})).await;

    assert!(!result.is_error);
    let text = result.joined_text();
    assert!(text.contains("Base URL: <unset>"));
    assert!(text.contains("Status: configuration missing"));
}

#[tokio::test]
async fn given_reachable_api_when_health_check_called_then_healthy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/change-requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "CHG-1"}])))
        .mount(&server)
        .await;

    let result = call(&context_for(&server), "health_check", json!({})).await;

    assert!(result.joined_text().contains("Status: healthy (1 change request(s) visible)"));
}

#[tokio::test]
async fn given_unknown_name_when_dispatched_then_none() {
    let server = MockServer::start().await;

    assert!(call_tool(&context_for(&server), "greet", &json!({})).await.is_none());
}

/// **VALUE**: A dot-segment id is reported as a bad argument, not sent upstream.
#[tokio::test]
async fn given_dot_segment_id_when_delete_tool_called_then_invalid_arguments_and_no_request() {
    let server = MockServer::start().await;

    let result = call(&context_for(&server), "delete_change_request", json!({"change_id": ".."})).await;

    assert!(result.is_error);
    assert_eq!(
        result.joined_text(),
        "Invalid arguments: '..' cannot be used as a path segment"
    );
    let received = server.received_requests().await.expect("recording enabled");
    assert!(received.is_empty());
}

#[tokio::test]
async fn given_id_with_slash_when_get_tool_called_then_encoded_into_one_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-feedback/a%2Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "a/b"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = call(&context_for(&server), "get_feedback", json!({"feedback_id": "a/b"})).await;

    assert!(!result.is_error, "{}", result.joined_text());
}
