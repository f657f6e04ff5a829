use crate::helpers::{config_for, mount_get_json};

use api_client::services::ChangeRequestFilters;
use api_client::{ApiError, ApiServiceFactory};

use std::sync::Arc;

use serde_json::json;
use wiremock::MockServer;

/// **VALUE**: Every accessor refuses to hand out a service before the scope opens.
///
/// **BUG THIS CATCHES**: Would catch accessors returning a service bound to a
/// missing connection, which would only fail later and less clearly.
#[tokio::test]
async fn given_unopened_factory_when_accessors_called_then_not_ready() {
    let server = MockServer::start().await;
    let factory = ApiServiceFactory::new(Arc::new(config_for(&server)));

    assert!(!factory.is_open());
    assert!(matches!(factory.change_requests(), Err(ApiError::NotReady { .. })));
    assert!(matches!(factory.systems(), Err(ApiError::NotReady { .. })));
    assert!(matches!(factory.feedback(), Err(ApiError::NotReady { .. })));
    assert!(matches!(factory.projects(), Err(ApiError::NotReady { .. })));
}

#[tokio::test]
async fn given_closed_factory_when_accessors_called_then_not_ready() {
    let server = MockServer::start().await;
    let mut factory = ApiServiceFactory::new(Arc::new(config_for(&server)));
    factory.open().unwrap();
    assert!(factory.change_requests().is_ok());

    factory.close();

    assert!(!factory.is_open());
    assert!(matches!(factory.change_requests(), Err(ApiError::NotReady { .. })));
}

/// **VALUE**: `run` closes the scope after a successful unit of work.
#[tokio::test]
async fn given_run_when_work_succeeds_then_result_returned_and_scope_closed() {
    let server = MockServer::start().await;
    mount_get_json(&server, "/change-requests", json!([{"id": "CHG-1"}, {"id": "CHG-2"}])).await;
    let mut factory = ApiServiceFactory::new(Arc::new(config_for(&server)));

    let count = factory
        .run(async |api| {
            let records = api
                .change_requests()?
                .list(&ChangeRequestFilters::default())
                .await?;
            Ok(records.len())
        })
        .await
        .unwrap();

    assert_eq!(count, 2);
    assert!(!factory.is_open(), "Scope must be released after run");
}

/// **VALUE**: `run` closes the scope when the unit of work fails too.
#[tokio::test]
async fn given_run_when_work_fails_then_error_propagated_and_scope_closed() {
    let server = MockServer::start().await;
    let mut factory = ApiServiceFactory::new(Arc::new(config_for(&server)));

    let result: Result<(), ApiError> = factory
        .run(async |_api| Err(ApiError::payload("bad body")))
        .await;

    assert!(matches!(result, Err(ApiError::Payload { .. })));
    assert!(!factory.is_open(), "Scope must be released on error");
}

/// **VALUE**: Two factories over one shared config are independent scopes.
#[tokio::test]
async fn given_shared_config_when_two_factories_used_then_scopes_are_independent() {
    let server = MockServer::start().await;
    let config = Arc::new(config_for(&server));
    let mut first = ApiServiceFactory::new(Arc::clone(&config));
    let second = ApiServiceFactory::new(Arc::clone(&config));

    first.open().unwrap();

    assert!(first.is_open());
    assert!(!second.is_open());
    assert!(second.systems().is_err());
}
