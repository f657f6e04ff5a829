use crate::error::ApiError;

use serde_json::Value;

/// Parse caller-supplied JSON text into a request body.
///
/// # Errors
///
/// Returns [`ApiError::Payload`] with the parser's detail; nothing is sent.
pub fn parse_payload(raw: &str) -> Result<Value, ApiError> {
    serde_json::from_str(raw).map_err(|e| ApiError::payload(e.to_string()))
}
