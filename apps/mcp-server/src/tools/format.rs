//! Rendering of tool results as human-readable text.

use crate::error::ToolError;

use api_client::ApiError;

use serde_json::Value;

/// Pretty JSON, falling back to compact output.
pub fn render_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

pub fn render_records(label: &str, records: &[Value]) -> String {
    if records.is_empty() {
        return format!("No {label} records found");
    }

    let listing = render_json(&Value::Array(records.to_vec()));
    format!("Found {} {label}(s):\n{listing}", records.len())
}

/// One line per error kind, with the detail the caller needs to act on.
pub fn render_error(error: &ToolError) -> String {
    match error {
        ToolError::Api(error) => render_api_error(error),
        ToolError::InvalidArguments { message, .. } => format!("Invalid arguments: {message}"),
    }
}

pub fn render_api_error(error: &ApiError) -> String {
    match error {
        ApiError::Config(error) => format!("Configuration error: {}", error.reason()),
        ApiError::NotReady { message, .. } => format!("Internal error: {message}"),
        ApiError::HttpStatus { status, body, .. } => {
            format!("HTTP error occurred: {status} - {body}")
        }
        ApiError::Transport { message, .. } => format!("Request error occurred: {message}"),
        ApiError::Payload { message, .. } => format!("Invalid JSON payload: {message}"),
        ApiError::InvalidIdentifier { .. } => format!("Invalid arguments: {}", error.detail()),
    }
}
