//! Tool surface over the API pipeline.
//!
//! Every call runs in its own connection scope and always produces text:
//! successful results as formatted JSON, failures as a one-line message
//! flagged with `isError`.

pub mod arguments;
pub mod catalog;
pub mod change_requests;
pub mod format;
pub mod resource;

pub use catalog::{Family, Operation, ToolKind, list_schemas};

use crate::protocol::CallToolResult;

use api_client::services::{ChangeRequests, Feedback, Projects, Systems};
use api_client::{ApiError, ApiServiceFactory, ConfigError, EndpointConfig, health_check};

use std::sync::Arc;

use log::{debug, warn};
use serde_json::Value;

/// What every tool call needs: the resolved configuration, or why it failed.
#[derive(Debug, Clone)]
pub struct ToolContext {
    config: Result<Arc<EndpointConfig>, ConfigError>,
}

impl ToolContext {
    pub fn new(config: Result<Arc<EndpointConfig>, ConfigError>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> Result<&Arc<EndpointConfig>, &ConfigError> {
        self.config.as_ref()
    }

    /// Run one unit of work in a fresh connection scope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] when no configuration could be resolved,
    /// otherwise whatever the unit of work returns.
    pub async fn with_api<T, F>(&self, work: F) -> Result<T, ApiError>
    where
        F: AsyncFnOnce(&ApiServiceFactory) -> Result<T, ApiError>,
    {
        let config = self.config.as_ref().map_err(|e| ApiError::from(e.clone()))?;
        let mut factory = ApiServiceFactory::new(Arc::clone(config));
        factory.run(work).await
    }
}

/// Dispatch a `tools/call`. Returns `None` for an unknown tool name.
pub async fn call_tool(context: &ToolContext, name: &str, args: &Value) -> Option<CallToolResult> {
    let kind = ToolKind::lookup(name)?;
    debug!("Calling tool {name}");

    let outcome = match kind {
        ToolKind::Resource(family, operation) => match family {
            Family::ChangeRequests => {
                resource::run::<ChangeRequests>(context, family, operation, args).await
            }
            Family::Systems => resource::run::<Systems>(context, family, operation, args).await,
            Family::Feedback => resource::run::<Feedback>(context, family, operation, args).await,
            Family::Projects => resource::run::<Projects>(context, family, operation, args).await,
        },
        ToolKind::AddComment => change_requests::add_comment(context, args).await,
        ToolKind::Approve => change_requests::approve(context, args).await,
        ToolKind::Reject => change_requests::reject(context, args).await,
        ToolKind::AnalyzeChange => change_requests::analyze_change(context, args).await,
        ToolKind::HealthCheck => Ok(health_check(context.config()).await.to_string()),
    };

    Some(match outcome {
        Ok(text) => CallToolResult::text(text),
        Err(error) => {
            warn!("Tool {name} failed: {error}");
            CallToolResult::error(format::render_error(&error))
        }
    })
}
