use crate::api_client::ApiClient;
use crate::config::EndpointConfig;
use crate::error::ApiError;
use crate::services::{
    ChangeRequestsService, FeedbackService, ProjectsService, Resource, ResourceService,
    SystemsService,
};

use std::sync::Arc;

use log::debug;

/// Scopes one connection to a unit of work and hands out services bound to it.
///
/// Accessors fail with [`ApiError::NotReady`] before [`ApiServiceFactory::open`]
/// and after [`ApiServiceFactory::close`]. Dropping the factory releases the
/// connection as well, so early returns and panics cannot leak it.
#[derive(Debug)]
pub struct ApiServiceFactory {
    client: ApiClient,
}

impl ApiServiceFactory {
    pub fn new(config: Arc<EndpointConfig>) -> Self {
        Self {
            client: ApiClient::new(config),
        }
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be built.
    pub fn open(&mut self) -> Result<(), ApiError> {
        self.client.connect()
    }

    pub fn close(&mut self) {
        self.client.disconnect();
    }

    pub fn is_open(&self) -> bool {
        self.client.is_connected()
    }

    /// Open a scope, run `work` inside it, and close it on every return path.
    ///
    /// # Errors
    ///
    /// Returns the error from opening the scope, or whatever `work` returns.
    pub async fn run<T, F>(&mut self, work: F) -> Result<T, ApiError>
    where
        F: AsyncFnOnce(&ApiServiceFactory) -> Result<T, ApiError>,
    {
        self.open()?;
        let result = work(&*self).await;
        self.close();
        result
    }

    pub fn client(&self) -> Result<&ApiClient, ApiError> {
        if !self.client.is_connected() {
            return Err(ApiError::not_ready(
                "service factory used outside of an open connection scope",
            ));
        }
        Ok(&self.client)
    }

    /// Service for any resource family, bound to the open connection.
    pub fn service<R: Resource>(&self) -> Result<ResourceService<'_, R>, ApiError> {
        Ok(ResourceService::new(self.client()?))
    }

    pub fn change_requests(&self) -> Result<ChangeRequestsService<'_>, ApiError> {
        self.service()
    }

    pub fn systems(&self) -> Result<SystemsService<'_>, ApiError> {
        self.service()
    }

    pub fn feedback(&self) -> Result<FeedbackService<'_>, ApiError> {
        self.service()
    }

    pub fn projects(&self) -> Result<ProjectsService<'_>, ApiError> {
        self.service()
    }
}

impl Drop for ApiServiceFactory {
    fn drop(&mut self) {
        if self.client.is_connected() {
            debug!("Service factory dropped with an open scope, releasing connection");
            self.client.disconnect();
        }
    }
}
