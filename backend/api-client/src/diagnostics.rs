//! Health check for the configured API endpoint.
//!
//! Reports what the pipeline is configured with, then makes one real list
//! call to classify connectivity.

use crate::config::EndpointConfig;
use crate::error::{ApiError, ConfigError};
use crate::factory::ApiServiceFactory;
use crate::services::ChangeRequestFilters;

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;

/// Outcome of the connectivity probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HealthStatus {
    ConfigurationMissing { reason: String },
    UnauthenticatedLikely { http_status: u16 },
    Unreachable { message: String },
    UpstreamError { http_status: u16, body: String },
    Healthy { records: usize },
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub base_url: Option<String>,
    pub auth_scheme: Option<String>,
    pub credential_present: bool,
    pub timeout_secs: Option<f64>,
    #[serde(flatten)]
    pub status: HealthStatus,
}

impl HealthReport {
    fn from_config(config: &EndpointConfig, status: HealthStatus) -> Self {
        Self {
            base_url: Some(config.base_url().to_string()),
            auth_scheme: Some(config.auth_scheme().to_string()),
            credential_present: config.has_credential(),
            timeout_secs: Some(config.timeout().as_secs_f64()),
            status,
        }
    }
}

impl fmt::Display for HealthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unset = "<unset>";
        writeln!(f, "Base URL: {}", self.base_url.as_deref().unwrap_or(unset))?;
        writeln!(f, "Auth scheme: {}", self.auth_scheme.as_deref().unwrap_or(unset))?;
        writeln!(
            f,
            "Credential: {}",
            if self.credential_present { "present" } else { "not set" }
        )?;
        match self.timeout_secs {
            Some(secs) => writeln!(f, "Timeout: {secs}s")?,
            None => writeln!(f, "Timeout: {unset}")?,
        }

        match &self.status {
            HealthStatus::ConfigurationMissing { reason } => {
                write!(f, "Status: configuration missing ({reason})")
            }
            HealthStatus::UnauthenticatedLikely { http_status } => {
                write!(
                    f,
                    "Status: unauthenticated (HTTP {http_status}); check the API credential"
                )
            }
            HealthStatus::Unreachable { message } => write!(f, "Status: unreachable ({message})"),
            HealthStatus::UpstreamError { http_status, body } => {
                write!(f, "Status: upstream error (HTTP {http_status} - {body})")
            }
            HealthStatus::Healthy { records } => {
                write!(f, "Status: healthy ({records} change request(s) visible)")
            }
        }
    }
}

/// Report the configuration and probe the API with one change-request list call.
///
/// Never fails: every outcome, including a missing configuration, is a
/// [`HealthStatus`].
pub async fn health_check(config: Result<&Arc<EndpointConfig>, &ConfigError>) -> HealthReport {
    let config = match config {
        Ok(config) => config,
        Err(error) => {
            warn!("Health check: configuration unavailable: {error}");
            return HealthReport {
                base_url: None,
                auth_scheme: None,
                credential_present: false,
                timeout_secs: None,
                status: HealthStatus::ConfigurationMissing {
                    reason: error.reason(),
                },
            };
        }
    };

    let mut factory = ApiServiceFactory::new(Arc::clone(config));
    let probe = factory
        .run(async |api| api.change_requests()?.list(&ChangeRequestFilters::default()).await)
        .await;

    let status = classify(probe);
    debug!("Health check against {}: {status:?}", config.base_url());

    HealthReport::from_config(config, status)
}

fn classify(probe: Result<Vec<serde_json::Value>, ApiError>) -> HealthStatus {
    match probe {
        Ok(records) => HealthStatus::Healthy {
            records: records.len(),
        },
        Err(ApiError::HttpStatus { status, .. }) if status.is_auth_failure() => {
            HealthStatus::UnauthenticatedLikely {
                http_status: status.0,
            }
        }
        Err(ApiError::HttpStatus { status, body, .. }) => HealthStatus::UpstreamError {
            http_status: status.0,
            body,
        },
        Err(ApiError::Config(error)) => HealthStatus::ConfigurationMissing {
            reason: error.reason(),
        },
        Err(error) => HealthStatus::Unreachable {
            message: error.detail(),
        },
    }
}
