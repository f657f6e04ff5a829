use changeanalysis_mcp::error::ServerError;
use changeanalysis_mcp::logger::{self, LOG_DIR_KEY};
use changeanalysis_mcp::server::McpServer;
use changeanalysis_mcp::tools::ToolContext;

use api_client::{EndpointConfig, ProcessEnv};

use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, error, info, warn};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // .env must be applied before LOG_LEVEL is read
    let dotenv = dotenvy::dotenv();

    let log_dir = std::env::var(LOG_DIR_KEY).ok().map(PathBuf::from);
    logger::initialize(logger::level_from_env(), log_dir.as_deref())?;

    match dotenv {
        Ok(path) => info!("Loaded .env from: {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found, using process environment"),
        Err(e) => warn!("Failed to parse .env: {e}"),
    }

    let config = EndpointConfig::resolve(&ProcessEnv).map(Arc::new);
    match &config {
        Ok(config) => info!(
            "API endpoint {} (auth {}, credential {}, timeout {}s)",
            config.base_url(),
            config.auth_scheme(),
            if config.has_credential() { "present" } else { "absent" },
            config.timeout().as_secs_f64()
        ),
        Err(e) => error!("API configuration unavailable, tools will report it: {e}"),
    }

    let server = McpServer::new(ToolContext::new(config));
    info!("Registered {} tools", server.tool_count());

    server.run_stdio().await
}
