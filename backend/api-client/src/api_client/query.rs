use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use crate::error::ApiError;

/// Query parameters for one request.
///
/// Absent and blank values never make it in, so callers can push every
/// optional filter unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key` unless it is `None` or blank after trimming.
    pub fn push<V: AsRef<str>>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            let trimmed = value.as_ref().trim();
            if !trimmed.is_empty() {
                self.pairs.insert(key.to_string(), trimmed.to_string());
            }
        }
        self
    }

    pub fn with<V: AsRef<str>>(mut self, key: &str, value: Option<V>) -> Self {
        self.push(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Everything a single call can carry besides method and path.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query: QueryParams,
    pub body: Option<Value>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Payload`] if the name or value is not a valid header.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, ApiError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApiError::payload(format!("invalid header name '{name}': {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ApiError::payload(format!("invalid value for header '{name}': {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }
}
