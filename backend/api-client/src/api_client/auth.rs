use crate::config::{API_KEY_HEADER, AuthScheme, EndpointConfig};

use std::fmt;

use log::{debug, warn};
use reqwest::RequestBuilder;
use reqwest::header::{AUTHORIZATION, HeaderMap};

/// Which auth header, if any, outgoing requests carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMode {
    Bearer,
    ApiKeyHeader,
    Unauthenticated,
    Unrecognized(String),
}

impl AuthMode {
    pub fn from_config(config: &EndpointConfig) -> Self {
        if !config.has_credential() {
            return AuthMode::Unauthenticated;
        }

        match config.auth_scheme() {
            AuthScheme::Bearer => AuthMode::Bearer,
            AuthScheme::ApiKeyHeader => AuthMode::ApiKeyHeader,
            AuthScheme::Unrecognized(name) => AuthMode::Unrecognized(name.clone()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthMode::Bearer | AuthMode::ApiKeyHeader)
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Bearer => write!(f, "bearer"),
            AuthMode::ApiKeyHeader => write!(f, "x-api-key"),
            AuthMode::Unauthenticated => write!(f, "unauthenticated"),
            AuthMode::Unrecognized(name) => write!(f, "unrecognized scheme '{name}'"),
        }
    }
}

/// Attach at most one auth header per the configured scheme.
pub(crate) fn apply_auth(request: RequestBuilder, config: &EndpointConfig) -> RequestBuilder {
    let Some(credential) = config.credential() else {
        debug!("No credential configured, sending request without auth header");
        return request;
    };

    match config.auth_scheme() {
        AuthScheme::Bearer => request.bearer_auth(credential.as_str()),
        AuthScheme::ApiKeyHeader => request.header(API_KEY_HEADER, credential.as_str()),
        AuthScheme::Unrecognized(name) => {
            warn!("Unrecognized auth scheme '{name}', sending request without auth header");
            request
        }
    }
}

/// Drop caller-supplied auth headers; [`apply_auth`] is the only source of them.
pub(crate) fn strip_auth_headers(headers: &mut HeaderMap) {
    for name in [AUTHORIZATION.as_str(), API_KEY_HEADER] {
        if headers.remove(name).is_some() {
            warn!("Ignoring caller-supplied {name} header, auth comes from the endpoint config");
        }
    }
}
