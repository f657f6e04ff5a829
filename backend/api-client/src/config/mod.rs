pub mod source;

pub use source::{ConfigSource, ProcessEnv};

use crate::error::config::ConfigError;

use common::RedactedApiKey;

use std::fmt;
use std::time::Duration;

use log::debug;
use url::Url;

pub const BASE_URL_KEY: &str = "CHANGEANALYSIS_API_BASE_URL";
pub const CREDENTIAL_KEY: &str = "CHANGEANALYSIS_API_KEY";
pub const TIMEOUT_KEY: &str = "CHANGEANALYSIS_API_TIMEOUT";
pub const AUTH_SCHEME_KEY: &str = "CHANGEANALYSIS_AUTH_SCHEME";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_KEY_HEADER: &str = "X-API-Key";

// ============================================
// AUTH SCHEME
// ============================================

/// How the credential is attached to outgoing requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthScheme {
    /// `Authorization: Bearer <credential>`
    Bearer,
    /// `X-API-Key: <credential>`
    #[default]
    ApiKeyHeader,
    /// Only reachable through [`EndpointConfig::with_auth_scheme`]; requests go out
    /// without an auth header.
    Unrecognized(String),
}

impl AuthScheme {
    /// Strict parse used by the resolver. Unknown names are rejected.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bearer" => Some(AuthScheme::Bearer),
            "x-api-key" | "header-key" => Some(AuthScheme::ApiKeyHeader),
            _ => None,
        }
    }

    /// Lenient parse: unknown names become [`AuthScheme::Unrecognized`].
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| AuthScheme::Unrecognized(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            AuthScheme::Bearer => "bearer",
            AuthScheme::ApiKeyHeader => "x-api-key",
            AuthScheme::Unrecognized(name) => name,
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================
// ENDPOINT CONFIG
// ============================================

/// Where and how to reach the change-management API.
///
/// Read-only once built; share it between connection scopes behind an `Arc`.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    base_url: String,
    timeout: Duration,
    credential: Option<RedactedApiKey>,
    auth_scheme: AuthScheme,
}

impl EndpointConfig {
    /// Build a configuration programmatically with defaults for everything but the URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `base_url` is empty or not an absolute http(s) URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        validate_base_url(&base_url)?;

        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            credential: None,
            auth_scheme: AuthScheme::default(),
        })
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::invalid(
                TIMEOUT_KEY,
                format!("{}", timeout.as_secs_f64()),
                "timeout must be a positive number of seconds",
            ));
        }
        self.timeout = timeout;
        Ok(self)
    }

    /// Blank credentials are treated as no credential.
    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        let credential = credential.into();
        self.credential = if credential.trim().is_empty() {
            None
        } else {
            Some(RedactedApiKey::new(credential))
        };
        self
    }

    pub fn with_auth_scheme(mut self, auth_scheme: AuthScheme) -> Self {
        self.auth_scheme = auth_scheme;
        self
    }

    /// Resolve the configuration from a key-value source.
    ///
    /// Pure with respect to `source`: the same input always yields the same result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - the base URL is missing, blank, or not an absolute http(s) URL
    /// - the timeout is present but not a positive number
    /// - the auth scheme is present but not `bearer` or `x-api-key`
    pub fn resolve(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        let base_url =
            non_blank(source, BASE_URL_KEY).ok_or_else(|| ConfigError::missing(BASE_URL_KEY))?;
        let mut config = Self::new(base_url)?;

        if let Some(raw) = non_blank(source, TIMEOUT_KEY) {
            config = config.with_timeout(parse_timeout(&raw)?)?;
        }

        if let Some(raw) = non_blank(source, AUTH_SCHEME_KEY) {
            let scheme = AuthScheme::parse(&raw).ok_or_else(|| {
                ConfigError::invalid(AUTH_SCHEME_KEY, &raw, "expected 'bearer' or 'x-api-key'")
            })?;
            config = config.with_auth_scheme(scheme);
        }

        if let Some(credential) = non_blank(source, CREDENTIAL_KEY) {
            config = config.with_credential(credential);
        } else {
            debug!("{CREDENTIAL_KEY} not set, requests will be unauthenticated");
        }

        debug!(
            "Resolved endpoint config: base_url={}, timeout={}s, auth_scheme={}, credential_present={}",
            config.base_url,
            config.timeout.as_secs_f64(),
            config.auth_scheme,
            config.has_credential()
        );

        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn credential(&self) -> Option<&RedactedApiKey> {
        self.credential.as_ref()
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    pub fn auth_scheme(&self) -> &AuthScheme {
        &self.auth_scheme
    }
}

// ============================================
// HELPERS
// ============================================

fn non_blank(source: &impl ConfigSource, key: &str) -> Option<String> {
    source
        .get(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[track_caller]
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    if base_url.trim().is_empty() {
        return Err(ConfigError::missing(BASE_URL_KEY));
    }

    let parsed = Url::parse(base_url)
        .map_err(|e| ConfigError::invalid(BASE_URL_KEY, base_url, e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::invalid(
            BASE_URL_KEY,
            base_url,
            "URL scheme must be http or https",
        ));
    }

    Ok(())
}

#[track_caller]
fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let seconds: f64 = raw.parse().map_err(|_| {
        ConfigError::invalid(TIMEOUT_KEY, raw, "timeout must be a number of seconds")
    })?;

    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(ConfigError::invalid(
            TIMEOUT_KEY,
            raw,
            "timeout must be a positive number of seconds",
        ));
    }

    Duration::try_from_secs_f64(seconds)
        .map_err(|e| ConfigError::invalid(TIMEOUT_KEY, raw, e.to_string()))
}
