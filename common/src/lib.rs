//! Shared leaf types for the change-analysis workspace.
//!
//! Nothing in here knows about HTTP clients or tools; these are the small
//! value types that both the API client and the MCP server pass around.
//!
//! ## Architecture
//!
//! - **common** (this crate): Error locations, status codes, credentials
//! - **api-client**: Configuration, transport and resource services
//! - **changeanalysis-mcp**: Tool surface wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_key;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;

#[cfg(test)]
mod tests;
