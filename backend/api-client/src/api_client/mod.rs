pub mod auth;
pub mod query;

pub use auth::AuthMode;
pub use query::{QueryParams, RequestOptions};

use crate::USER_AGENT;
use crate::config::EndpointConfig;
use crate::error::ApiError;

use auth::{apply_auth, strip_auth_headers};

use common::HttpStatusCode;

use std::sync::Arc;

use log::{debug, warn};
use reqwest::{Client, Method};
use serde_json::{Map, Value};
use url::Url;

/// Transport client for the change-management API.
///
/// Starts disconnected. [`ApiClient::connect`] opens one pooled HTTP
/// connection context that every verb method reuses until
/// [`ApiClient::disconnect`]. Calling a verb while disconnected fails with
/// [`ApiError::NotReady`].
#[derive(Debug)]
pub struct ApiClient {
    config: Arc<EndpointConfig>,
    client: Option<Client>,
}

impl ApiClient {
    pub fn new(config: Arc<EndpointConfig>) -> Self {
        Self {
            config,
            client: None,
        }
    }

    /// Open the connection context. A no-op if already connected.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be built
    /// (for example, the TLS backend fails to initialize).
    pub fn connect(&mut self) -> Result<(), ApiError> {
        if self.client.is_some() {
            return Ok(());
        }

        let client = Client::builder()
            .timeout(self.config.timeout())
            .user_agent(USER_AGENT)
            .build()?;

        debug!(
            "Opened connection to {} (timeout {}s, auth {})",
            self.config.base_url(),
            self.config.timeout().as_secs_f64(),
            self.auth_mode()
        );
        self.client = Some(client);
        Ok(())
    }

    /// Release the connection context. Safe to call repeatedly.
    pub fn disconnect(&mut self) {
        if self.client.take().is_some() {
            debug!("Closed connection to {}", self.config.base_url());
        }
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Which auth header outgoing requests carry.
    pub fn auth_mode(&self) -> AuthMode {
        AuthMode::from_config(&self.config)
    }

    pub async fn get(&self, endpoint: &str, query: Option<&QueryParams>) -> Result<Value, ApiError> {
        let options = RequestOptions::new().query(query.cloned().unwrap_or_default());
        self.send(Method::GET, endpoint, options).await
    }

    pub async fn post(&self, endpoint: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.send(Method::POST, endpoint, with_body(body)).await
    }

    pub async fn put(&self, endpoint: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.send(Method::PUT, endpoint, with_body(body)).await
    }

    pub async fn patch(&self, endpoint: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        self.send(Method::PATCH, endpoint, with_body(body)).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<Value, ApiError> {
        self.send(Method::DELETE, endpoint, RequestOptions::new()).await
    }

    /// Issue one request and normalize the response.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotReady`] if called while disconnected
    /// - [`ApiError::HttpStatus`] for any status >= 400, with the body text
    /// - [`ApiError::Transport`] for network failures, timeouts, or a 2xx body that is not JSON
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let client = self.client.as_ref().ok_or_else(|| {
            ApiError::not_ready("API client used outside of an open connection scope")
        })?;

        let url = self.request_url(endpoint, &options.query)?;
        debug!("{method} {url}");

        let mut headers = options.headers;
        strip_auth_headers(&mut headers);

        let mut request = client.request(method.clone(), url.clone()).headers(headers);
        request = apply_auth(request, &self.config);
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = HttpStatusCode(response.status().as_u16());

        if status.is_failure() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
            warn!("{method} {url} failed: HTTP {status}");
            return Err(ApiError::http_status(status.0, body));
        }

        if status.is_no_content() {
            return Ok(Value::Object(Map::new()));
        }

        let bytes = response.bytes().await?;
        let json: Value = serde_json::from_slice(&bytes)?;
        Ok(json)
    }

    /// `base_url` with `endpoint` appended verbatim, plus the query string.
    fn request_url(&self, endpoint: &str, query: &QueryParams) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{endpoint}", self.config.base_url()))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }
        Ok(url)
    }
}

fn with_body(body: Option<&Value>) -> RequestOptions {
    match body {
        Some(body) => RequestOptions::new().body(body.clone()),
        None => RequestOptions::new(),
    }
}
