//! Client pipeline for the change-management REST API.
//!
//! - [`config`] resolves an [`EndpointConfig`] from the environment
//! - [`api_client`] performs one HTTP call per invocation with auth injection
//! - [`services`] maps the four resource families onto paths and filters
//! - [`factory`] scopes a connection to a unit of work
//! - [`diagnostics`] reports configuration and probes connectivity

pub mod api_client;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod factory;
pub mod services;

#[cfg(test)]
mod tests;

pub use api_client::{ApiClient, AuthMode, QueryParams, RequestOptions};
pub use config::{AuthScheme, ConfigSource, EndpointConfig, ProcessEnv};
pub use diagnostics::{HealthReport, HealthStatus, health_check};
pub use error::{ApiError, ConfigError};
pub use factory::ApiServiceFactory;

pub const CLIENT_NAME: &str = "changeanalysis-mcp";
pub const USER_AGENT: &str =
    const_format::concatcp!(CLIENT_NAME, "/", env!("CARGO_PKG_VERSION"));
