use crate::helpers::{config_for, mount_get_json, only_request, open_factory};

use api_client::ApiError;
use api_client::services::{ChangeRequestFilters, FeedbackFilters, ProjectFilters, SystemFilters};

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Only the supplied, non-blank filters reach the query string.
#[tokio::test]
async fn given_some_filters_when_listing_change_requests_then_only_those_are_sent() {
    let server = MockServer::start().await;
    mount_get_json(&server, "/change-requests", json!([{"id": "CHG-1"}])).await;
    let api = open_factory(config_for(&server));

    let filters = ChangeRequestFilters {
        status: Some(String::from("open")),
        priority: Some(String::from("  ")),
        search: Some(String::from("CHG")),
        ..ChangeRequestFilters::default()
    };
    let records = api.change_requests().unwrap().list(&filters).await.unwrap();

    assert_eq!(records, vec![json!({"id": "CHG-1"})]);
    let request = only_request(&server).await;
    let mut pairs: Vec<(String, String)> = request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            (String::from("search"), String::from("CHG")),
            (String::from("status"), String::from("open")),
        ]
    );
}

/// **VALUE**: The three wire shapes all normalize to a list.
#[tokio::test]
async fn given_envelope_and_single_responses_when_listing_then_normalized() {
    let server = MockServer::start().await;
    mount_get_json(&server, "/get-projects", json!({"items": [{"id": "P-1"}, {"id": "P-2"}]})).await;
    mount_get_json(&server, "/get-systems", json!({"id": "SYS-1"})).await;
    let api = open_factory(config_for(&server));

    let projects = api
        .projects()
        .unwrap()
        .list(&ProjectFilters::default())
        .await
        .unwrap();
    let systems = api
        .systems()
        .unwrap()
        .list(&SystemFilters::default())
        .await
        .unwrap();

    assert_eq!(projects, vec![json!({"id": "P-1"}), json!({"id": "P-2"})]);
    assert_eq!(systems, vec![json!({"id": "SYS-1"})]);
}

/// **VALUE**: `get` returns the server's mapping unchanged.
#[tokio::test]
async fn given_record_when_get_change_request_then_exact_mapping_returned() {
    let server = MockServer::start().await;
    mount_get_json(&server, "/change-requests/CHG-1", json!({"id": "CHG-1"})).await;
    let api = open_factory(config_for(&server));

    let record = api.change_requests().unwrap().get("CHG-1").await.unwrap();

    assert_eq!(record, json!({"id": "CHG-1"}));
}

/// **VALUE**: `get` passes transport errors through without extra wrapping.
#[tokio::test]
async fn given_missing_record_when_get_then_http_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/change-requests/CHG-404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;
    let api = open_factory(config_for(&server));

    let error = api.change_requests().unwrap().get("CHG-404").await.unwrap_err();

    assert_eq!(error.status_code(), Some(404));
    assert!(matches!(error, ApiError::HttpStatus { ref body, .. } if body == "not found"));
}

/// **VALUE**: Create posts the body and returns the server's record.
#[tokio::test]
async fn given_new_change_request_when_created_then_posted_and_server_record_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/change-requests"))
        .and(body_json(json!({"title": "Rotate certs"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": "CHG-7", "title": "Rotate certs"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let api = open_factory(config_for(&server));

    let created = api
        .change_requests()
        .unwrap()
        .create(&json!({"title": "Rotate certs"}))
        .await
        .unwrap();

    assert_eq!(created["id"], "CHG-7");
}

/// **VALUE**: Update is a PATCH with only the supplied fields.
#[tokio::test]
async fn given_partial_update_when_updated_then_patch_sent() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/change-requests/CHG-1"))
        .and(body_json(json!({"priority": "high"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "CHG-1", "priority": "high"})))
        .expect(1)
        .mount(&server)
        .await;
    let api = open_factory(config_for(&server));

    let updated = api
        .change_requests()
        .unwrap()
        .update("CHG-1", &json!({"priority": "high"}))
        .await
        .unwrap();

    assert_eq!(updated["priority"], "high");
}

/// **VALUE**: Delete on a 204 yields `{}`.
#[tokio::test]
async fn given_delete_when_server_answers_no_content_then_empty_mapping() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/change-requests/CHG-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let api = open_factory(config_for(&server));

    let result = api.change_requests().unwrap().delete("CHG-1").await.unwrap();

    assert_eq!(result, json!({}));
}

/// **VALUE**: Comments, approvals and rejections hit their sub-resource paths.
#[tokio::test]
async fn given_change_request_actions_when_invoked_then_nested_paths_posted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/change-requests/CHG-1/comments"))
        .and(body_json(json!({"text": "LGTM"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1, "text": "LGTM"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/change-requests/CHG-1/approve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "CHG-1", "status": "approved"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/change-requests/CHG-2/reject"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "CHG-2", "status": "rejected"})))
        .expect(1)
        .mount(&server)
        .await;
    let api = open_factory(config_for(&server));
    let service = api.change_requests().unwrap();

    let comment = service.add_comment("CHG-1", &json!({"text": "LGTM"})).await.unwrap();
    let approved = service.approve("CHG-1").await.unwrap();
    let rejected = service.reject("CHG-2").await.unwrap();

    assert_eq!(comment["text"], "LGTM");
    assert_eq!(approved["status"], "approved");
    assert_eq!(rejected["status"], "rejected");
}

/// **VALUE**: Systems list under `/get-systems` but items live under `/systems/{id}`.
///
/// **BUG THIS CATCHES**: Would catch someone unifying the paths, which the
/// upstream API does not serve.
#[tokio::test]
async fn given_systems_service_when_item_operations_called_then_systems_prefix_used() {
    let server = MockServer::start().await;
    mount_get_json(&server, "/systems/SYS-1", json!({"id": "SYS-1"})).await;
    Mock::given(method("PATCH"))
        .and(path("/systems/SYS-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "SYS-1", "name": "CRM"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/systems/SYS-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/get-systems"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "SYS-2"})))
        .expect(1)
        .mount(&server)
        .await;
    let api = open_factory(config_for(&server));
    let systems = api.systems().unwrap();

    assert_eq!(systems.get("SYS-1").await.unwrap()["id"], "SYS-1");
    assert_eq!(systems.update("SYS-1", &json!({"name": "CRM"})).await.unwrap()["name"], "CRM");
    assert_eq!(systems.delete("SYS-1").await.unwrap(), json!({}));
    assert_eq!(systems.create(&json!({"name": "HR"})).await.unwrap()["id"], "SYS-2");
}

/// **VALUE**: Feedback's `source_system` filter goes out as `sourceSystem`.
#[tokio::test]
async fn given_feedback_source_filter_when_listing_then_camel_case_param_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get-feedback"))
        .and(query_param("sourceSystem", "SAP"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "FB-1"}])))
        .expect(1)
        .mount(&server)
        .await;
    let api = open_factory(config_for(&server));

    let filters = FeedbackFilters {
        source_system: Some(String::from("SAP")),
        ..FeedbackFilters::default()
    };
    let records = api.feedback().unwrap().list(&filters).await.unwrap();

    assert_eq!(records.len(), 1);
    let request = only_request(&server).await;
    assert_eq!(request.url.query(), Some("sourceSystem=SAP"));
}

#[tokio::test]
async fn given_feedback_and_project_ids_when_fetched_then_get_prefixed_paths_used() {
    let server = MockServer::start().await;
    mount_get_json(&server, "/get-feedback/FB-1", json!({"id": "FB-1"})).await;
    mount_get_json(&server, "/get-projects/P-1", json!({"id": "P-1"})).await;
    let api = open_factory(config_for(&server));

    assert_eq!(api.feedback().unwrap().get("FB-1").await.unwrap()["id"], "FB-1");
    assert_eq!(api.projects().unwrap().get("P-1").await.unwrap()["id"], "P-1");
}

/// **VALUE**: An identifier stays inside its own family's item path.
///
/// **BUG THIS CATCHES**: Would catch `../x` being collapsed by URL parsing, or
/// `a/b?c` being split into extra segments and a query string.
#[tokio::test]
async fn given_ids_with_reserved_characters_when_fetched_then_sent_as_one_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "x"})))
        .mount(&server)
        .await;
    let api = open_factory(config_for(&server));

    api.change_requests().unwrap().get("../x").await.unwrap();
    api.change_requests().unwrap().get("a/b?c").await.unwrap();

    let requests = server.received_requests().await.expect("recording enabled");
    let paths: Vec<&str> = requests.iter().map(|request| request.url.path()).collect();
    assert_eq!(paths, vec!["/change-requests/..%2Fx", "/change-requests/a%2Fb%3Fc"]);
    assert!(requests.iter().all(|request| request.url.query().is_none()));
}

/// **VALUE**: A dot-segment id on a destructive call never reaches the server.
#[tokio::test]
async fn given_dot_segment_id_when_deleted_then_invalid_identifier_and_no_request() {
    let server = MockServer::start().await;
    let api = open_factory(config_for(&server));

    let delete = api.change_requests().unwrap().delete("..").await;
    let approve = api.change_requests().unwrap().approve(".").await;

    assert!(matches!(delete, Err(ApiError::InvalidIdentifier { .. })));
    assert!(matches!(approve, Err(ApiError::InvalidIdentifier { .. })));
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}
