use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Endpoint configuration could not be resolved.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Config Missing Error: {key} is not set {location}")]
    Missing {
        key: String,
        location: ErrorLocation,
    },

    #[error("Config Invalid Error: {key}='{value}': {reason} {location}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn missing(key: impl Into<String>) -> Self {
        ConfigError::Missing {
            key: key.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::Invalid {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The configuration key this error is about.
    pub fn key(&self) -> &str {
        match self {
            ConfigError::Missing { key, .. } => key,
            ConfigError::Invalid { key, .. } => key,
        }
    }

    /// Human-readable reason without the source location.
    pub fn reason(&self) -> String {
        match self {
            ConfigError::Missing { key, .. } => format!("{key} is not set"),
            ConfigError::Invalid {
                key, value, reason, ..
            } => format!("{key}='{value}': {reason}"),
        }
    }
}
