//! Test helpers for MCP server integration tests.

use api_client::{ConfigError, EndpointConfig};
use changeanalysis_mcp::protocol::CallToolResult;
use changeanalysis_mcp::server::McpServer;
use changeanalysis_mcp::tools::{ToolContext, call_tool};

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::io::BufReader;
use wiremock::MockServer;

/// Tool context pointed at `server`, no credential.
pub fn context_for(server: &MockServer) -> ToolContext {
    let config = EndpointConfig::new(server.uri())
        .expect("mock server URI is a valid base URL")
        .with_timeout(Duration::from_secs(5))
        .expect("positive timeout");
    ToolContext::new(Ok(Arc::new(config)))
}

/// Tool context whose configuration could not be resolved.
pub fn unconfigured_context() -> ToolContext {
    ToolContext::new(Err(ConfigError::missing("CHANGEANALYSIS_API_BASE_URL")))
}

/// Call a tool that must exist.
pub async fn call(context: &ToolContext, name: &str, args: Value) -> CallToolResult {
    call_tool(context, name, &args)
        .await
        .unwrap_or_else(|| panic!("tool {name} should exist"))
}

/// Feed `input` lines to the server and parse every response line.
pub async fn exchange(server: &McpServer, input: &[Value]) -> Vec<Value> {
    let mut raw = String::new();
    for message in input {
        raw.push_str(&message.to_string());
        raw.push('\n');
    }
    exchange_raw(server, &raw).await
}

pub async fn exchange_raw(server: &McpServer, raw: &str) -> Vec<Value> {
    let mut output: Vec<u8> = Vec::new();
    server
        .serve(BufReader::new(raw.as_bytes()), &mut output)
        .await
        .expect("serve should finish when input ends");

    String::from_utf8(output)
        .expect("responses are UTF-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("each response line is JSON"))
        .collect()
}
