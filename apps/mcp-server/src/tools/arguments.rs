//! Extraction of tool arguments from the raw JSON-RPC `arguments` object.

use crate::error::ToolError;

use api_client::services::parse_payload;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const PAYLOAD_ARG: &str = "data";

/// Deserialize list filters. Missing arguments mean "no filters".
pub fn filters<F: DeserializeOwned>(args: &Value) -> Result<F, ToolError> {
    let args = match args {
        Value::Null => Value::Object(Map::new()),
        other => other.clone(),
    };

    serde_json::from_value(args)
        .map_err(|e| ToolError::invalid_arguments(format!("invalid filter arguments: {e}")))
}

/// A required, non-blank string argument, trimmed.
pub fn required_str(args: &Value, key: &str) -> Result<String, ToolError> {
    match args.get(key) {
        Some(Value::String(value)) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        Some(Value::String(_)) => Err(ToolError::invalid_arguments(format!(
            "'{key}' must not be empty"
        ))),
        Some(Value::Number(number)) => Ok(number.to_string()),
        Some(_) => Err(ToolError::invalid_arguments(format!("'{key}' must be a string"))),
        None => Err(ToolError::invalid_arguments(format!("missing required argument '{key}'"))),
    }
}

/// The request body under `data`.
///
/// Callers normally pass JSON text, which is parsed here so a malformed body
/// never reaches the transport. An already-structured object or array is
/// accepted as-is.
pub fn payload(args: &Value) -> Result<Value, ToolError> {
    match args.get(PAYLOAD_ARG) {
        Some(Value::String(raw)) => Ok(parse_payload(raw)?),
        Some(value @ (Value::Object(_) | Value::Array(_))) => Ok(value.clone()),
        Some(_) => Err(ToolError::invalid_arguments(format!(
            "'{PAYLOAD_ARG}' must be a JSON string"
        ))),
        None => Err(ToolError::invalid_arguments(format!(
            "missing required argument '{PAYLOAD_ARG}'"
        ))),
    }
}
