//! Error types for calls made through the API pipeline.
//!
//! - HTTP status codes are stored directly, never parsed from strings
//! - Network failures keep the timeout/connect classification from reqwest
//! - All errors include ErrorLocation for debugging

use crate::error::config::ConfigError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Not Ready Error: {message} {location}")]
    NotReady {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP Status Error: {status} - {body} {location}")]
    HttpStatus {
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("Payload Error: {message} {location}")]
    Payload {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Identifier Error: '{id}' cannot be used as a path segment {location}")]
    InvalidIdentifier { id: String, location: ErrorLocation },
}

impl ApiError {
    #[track_caller]
    pub fn not_ready(message: impl Into<String>) -> Self {
        ApiError::NotReady {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        ApiError::HttpStatus {
            status: HttpStatusCode(status),
            body: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        ApiError::Transport {
            message: message.into(),
            is_timeout: false,
            is_connection: false,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn payload(message: impl Into<String>) -> Self {
        ApiError::Payload {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_identifier(id: impl Into<String>) -> Self {
        ApiError::InvalidIdentifier {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable short label for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Config(_) => "configuration",
            ApiError::NotReady { .. } => "not_ready",
            ApiError::HttpStatus { .. } => "http_status",
            ApiError::Transport { .. } => "transport",
            ApiError::Payload { .. } => "payload",
            ApiError::InvalidIdentifier { .. } => "invalid_identifier",
        }
    }

    /// Get HTTP status code if the upstream API answered with one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(status.0),
            _ => None,
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::HttpStatus { status, .. } if status.is_auth_failure())
    }

    /// The error detail without the source location, for presenting to a caller.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Config(error) => error.reason(),
            ApiError::NotReady { message, .. } => message.clone(),
            ApiError::HttpStatus { status, body, .. } => format!("{status} - {body}"),
            ApiError::Transport { message, .. } => message.clone(),
            ApiError::Payload { message, .. } => message.clone(),
            ApiError::InvalidIdentifier { id, .. } => {
                format!("'{id}' cannot be used as a path segment")
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ApiError::Transport {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for ApiError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiError::Transport {
            message: format!("invalid request URL: {error}"),
            is_timeout: false,
            is_connection: false,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

// A 2xx body that is not JSON is a malformed upstream response
impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ApiError::Transport {
            message: format!("malformed JSON response: {error}"),
            is_timeout: false,
            is_connection: false,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
