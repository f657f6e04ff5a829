//! MCP server: newline-delimited JSON-RPC 2.0 over stdin/stdout.

use crate::error::ServerError;
use crate::protocol::{
    CallToolParams, InitializeResult, JSONRPC_VERSION, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, PROTOCOL_VERSION, ServerCapabilities, ServerInfo,
    ToolsCapability,
};
use crate::tools::{ToolContext, call_tool, list_schemas};
use crate::{SERVER_NAME, SERVER_VERSION};

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

pub struct McpServer {
    context: ToolContext,
}

impl McpServer {
    pub fn new(context: ToolContext) -> Self {
        Self { context }
    }

    pub fn tool_count(&self) -> usize {
        list_schemas().len()
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] if stdin cannot be read or stdout cannot be written.
    pub async fn run_stdio(&self) -> Result<(), ServerError> {
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Read one JSON-RPC message per line from `reader`, answer on `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] on IO failure or if a response cannot be encoded.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("{SERVER_NAME} {SERVER_VERSION} listening on stdio");
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(&line).await {
                let mut encoded = serde_json::to_string(&response)?;
                encoded.push('\n');
                writer.write_all(encoded.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle one raw line. Notifications produce no response.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!("Discarding malformed message: {e}");
                Some(JsonRpcResponse::error(
                    Value::Null,
                    JsonRpcError::parse_error(e.to_string()),
                ))
            }
        }
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id.clone() else {
            debug!("Notification received: {}", request.method);
            return None;
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_request(format!(
                    "unsupported jsonrpc version '{}'",
                    request.jsonrpc
                )),
            ));
        }

        debug!("Request {id}: {}", request.method);
        let outcome = match request.method.as_str() {
            "initialize" => to_result(&initialize_result()),
            "ping" => Ok(json!({})),
            "tools/list" => to_result(&ListToolsResult {
                tools: list_schemas(),
            }),
            "tools/call" => self.call(request.params).await,
            other => Err(JsonRpcError::method_not_found(other)),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    async fn call(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("tools/call requires params"))
            .and_then(|params| {
                serde_json::from_value(params)
                    .map_err(|e| JsonRpcError::invalid_params(format!("invalid tools/call params: {e}")))
            })?;

        let result = call_tool(&self.context, &params.name, &params.arguments)
            .await
            .ok_or_else(|| JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)))?;

        to_result(&result)
    }
}

fn initialize_result() -> InitializeResult {
    InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: ToolsCapability {
                list_changed: false,
            },
        },
        server_info: ServerInfo {
            name: SERVER_NAME.to_string(),
            version: SERVER_VERSION.to_string(),
        },
    }
}

fn to_result(value: &impl Serialize) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}
