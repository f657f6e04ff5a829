use api_client::ApiError;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Process-level failures of the MCP server.
///
/// Tool failures never end up here; they are rendered as tool results.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Logger could not be installed
    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    /// Reading stdin or writing stdout failed
    #[error("IO Error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
    },

    /// A response could not be encoded
    #[error("Protocol Error: {message} {location}")]
    Protocol {
        message: String,
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for ServerError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        ServerError::Io {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ServerError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ServerError::Protocol {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Why a single tool call failed.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The pipeline reported a failure (configuration, HTTP, transport, payload)
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The tool arguments were missing or of the wrong shape
    #[error("Invalid Arguments Error: {message} {location}")]
    InvalidArguments {
        message: String,
        location: ErrorLocation,
    },
}

impl ToolError {
    #[track_caller]
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        ToolError::InvalidArguments {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
