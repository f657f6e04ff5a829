use crate::error::ToolError;
use crate::tools::format::{render_error, render_records};

use api_client::{ApiError, ConfigError};

use serde_json::json;

/// **VALUE**: Each error kind renders with the detail a user needs.
#[test]
fn given_api_errors_when_rendered_then_messages_carry_kind_and_detail() {
    let http = ToolError::from(ApiError::http_status(500, "boom"));
    let transport = ToolError::from(ApiError::transport("connection refused"));
    let payload = ToolError::from(ApiError::payload("expected value at line 1 column 1"));
    let config = ToolError::from(ApiError::from(ConfigError::missing("CHANGEANALYSIS_API_BASE_URL")));

    assert_eq!(render_error(&http), "HTTP error occurred: 500 - boom");
    assert_eq!(render_error(&transport), "Request error occurred: connection refused");
    assert_eq!(
        render_error(&payload),
        "Invalid JSON payload: expected value at line 1 column 1"
    );
    assert_eq!(
        render_error(&config),
        "Configuration error: CHANGEANALYSIS_API_BASE_URL is not set"
    );
}

#[test]
fn given_invalid_arguments_when_rendered_then_message_has_no_location() {
    let error = ToolError::invalid_arguments("missing required argument 'change_id'");

    assert_eq!(
        render_error(&error),
        "Invalid arguments: missing required argument 'change_id'"
    );
}

#[test]
fn given_records_when_rendered_then_count_and_json_included() {
    let text = render_records("project", &[json!({"id": "P-1"})]);

    assert!(text.starts_with("Found 1 project(s):"));
    assert!(text.contains("\"P-1\""));
    assert_eq!(render_records("project", &[]), "No project records found");
}
