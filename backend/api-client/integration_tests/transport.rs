use crate::helpers::{TEST_CREDENTIAL, authenticated_config, config_for, only_request};

use api_client::{ApiClient, ApiError, AuthScheme, EndpointConfig, QueryParams, RequestOptions};

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use reqwest::Method;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn connected(config: EndpointConfig) -> ApiClient {
    let mut client = ApiClient::new(Arc::new(config));
    client.connect().expect("Failed to connect client");
    client
}

/// **VALUE**: Calling a verb without an open scope fails fast with NotReady.
///
/// **BUG THIS CATCHES**: Would catch the client quietly building an ad hoc
/// connection instead of reporting the programmer error.
#[tokio::test]
async fn given_disconnected_client_when_get_called_then_not_ready() {
    let server = MockServer::start().await;
    let client = ApiClient::new(Arc::new(config_for(&server)));

    let result = client.get("/change-requests", None).await;

    assert!(matches!(result, Err(ApiError::NotReady { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// **VALUE**: After disconnect the client refuses calls again.
#[tokio::test]
async fn given_disconnected_after_use_when_called_then_not_ready() {
    let server = MockServer::start().await;
    let mut client = connected(config_for(&server));
    client.disconnect();

    let result = client.delete("/systems/1").await;

    assert!(matches!(result, Err(ApiError::NotReady { .. })));
}

/// **VALUE**: Without a credential, no auth header of either kind is sent.
#[tokio::test]
async fn given_no_credential_when_request_sent_then_no_auth_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let client = connected(config_for(&server));

    client.get("/change-requests", None).await.unwrap();

    let request = only_request(&server).await;
    assert!(request.headers.get("authorization").is_none());
    assert!(request.headers.get("x-api-key").is_none());
}

/// **VALUE**: Bearer scheme sends exactly `Authorization: Bearer <credential>`.
#[tokio::test]
async fn given_bearer_scheme_when_request_sent_then_only_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("authorization", format!("Bearer {TEST_CREDENTIAL}").as_str()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "CHG-9"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = connected(authenticated_config(&server, AuthScheme::Bearer));

    client.post("/change-requests", Some(&json!({"title": "x"}))).await.unwrap();

    let request = only_request(&server).await;
    assert_eq!(request.headers.get_all("authorization").iter().count(), 1);
    assert!(request.headers.get("x-api-key").is_none());
}

/// **VALUE**: The header-key scheme sends `X-API-Key` and no Authorization.
#[tokio::test]
async fn given_api_key_scheme_when_request_sent_then_only_api_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(header("x-api-key", TEST_CREDENTIAL))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    let client = connected(authenticated_config(&server, AuthScheme::ApiKeyHeader));

    client.put("/systems/1", Some(&json!({"name": "ERP"}))).await.unwrap();

    let request = only_request(&server).await;
    assert!(request.headers.get("authorization").is_none());
}

/// **VALUE**: An unrecognized scheme degrades to no header instead of failing.
#[tokio::test]
async fn given_unrecognized_scheme_when_request_sent_then_succeeds_without_auth_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;
    let client = connected(authenticated_config(&server, AuthScheme::from_name("digest")));

    let result = client.get("/get-projects", None).await;

    assert_eq!(result.unwrap(), json!({"ok": true}));
    let request = only_request(&server).await;
    assert!(request.headers.get("authorization").is_none());
    assert!(request.headers.get("x-api-key").is_none());
}

/// **VALUE**: The end-to-end failure path: HTTP 500 surfaces status and body.
#[tokio::test]
async fn given_server_error_when_get_called_then_http_status_error_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/change-requests"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    let client = connected(config_for(&server));

    let result = client.get("/change-requests", None).await;

    match result {
        Err(ApiError::HttpStatus { status, body, .. }) => {
            assert_eq!(status.0, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("Expected HttpStatus error, got {other:?}"),
    }
    let request = only_request(&server).await;
    assert_eq!(request.url.query(), None, "No query string expected");
}

/// **VALUE**: 204 normalizes to `{}` rather than a parse error.
#[tokio::test]
async fn given_no_content_response_when_delete_called_then_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    let client = connected(config_for(&server));

    let result = client.delete("/change-requests/CHG-1").await.unwrap();

    assert_eq!(result, json!({}));
}

/// **VALUE**: A 2xx body that is not JSON is a Transport error.
#[tokio::test]
async fn given_malformed_json_body_when_get_called_then_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;
    let client = connected(config_for(&server));

    let result = client.get("/get-systems", None).await;

    assert!(matches!(result, Err(ApiError::Transport { .. })), "{result:?}");
}

/// **VALUE**: Connection failures are Transport errors flagged as connection problems.
#[tokio::test]
async fn given_unreachable_server_when_get_called_then_transport_error() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    drop(server);
    let client = connected(config);

    let result = client.get("/change-requests", None).await;

    match result {
        Err(ApiError::Transport { is_connection, .. }) => assert!(is_connection),
        other => panic!("Expected Transport error, got {other:?}"),
    }
}

/// **VALUE**: The configured timeout applies to each call.
#[tokio::test]
async fn given_slow_server_when_timeout_elapses_then_transport_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;
    let config = config_for(&server)
        .with_timeout(Duration::from_millis(200))
        .unwrap();
    let client = connected(config);

    let result = client.get("/change-requests", None).await;

    match result {
        Err(ApiError::Transport { is_timeout, .. }) => assert!(is_timeout),
        other => panic!("Expected timeout, got {other:?}"),
    }
}

/// **VALUE**: Query pairs, JSON bodies and extra headers all reach the server.
#[tokio::test]
async fn given_request_options_when_sent_then_query_body_and_headers_arrive() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/change-requests/CHG-1"))
        .and(query_param("dry_run", "true"))
        .and(header("x-request-source", "tests"))
        .and(body_json(json!({"status": "closed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "CHG-1"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = connected(config_for(&server));

    let options = RequestOptions::new()
        .query(QueryParams::new().with("dry_run", Some("true")).with("skip", None::<&str>))
        .body(json!({"status": "closed"}))
        .header("x-request-source", "tests")
        .unwrap();

    let result = client.send(Method::PATCH, "/change-requests/CHG-1", options).await;

    assert_eq!(result.unwrap(), json!({"id": "CHG-1"}));
    let request = only_request(&server).await;
    assert_eq!(request.url.query(), Some("dry_run=true"));
}

/// **VALUE**: Auth headers only ever come from the endpoint config.
///
/// **BUG THIS CATCHES**: Would catch a caller-supplied Authorization header
/// being sent alongside the configured one.
#[tokio::test]
async fn given_caller_auth_headers_when_sent_then_exactly_one_configured_auth_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    let client = connected(authenticated_config(&server, AuthScheme::Bearer));

    let options = RequestOptions::new()
        .header("Authorization", "Basic xyz")
        .unwrap()
        .header("X-API-Key", "other")
        .unwrap();
    client.send(Method::GET, "/change-requests", options).await.unwrap();

    let request = only_request(&server).await;
    let authorization: Vec<_> = request.headers.get_all("authorization").iter().collect();
    assert_eq!(authorization.len(), 1);
    assert_eq!(
        authorization[0].to_str().unwrap(),
        format!("Bearer {TEST_CREDENTIAL}")
    );
    assert!(request.headers.get("x-api-key").is_none());
}

#[tokio::test]
async fn given_caller_auth_header_without_credential_when_sent_then_no_auth_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    let client = connected(config_for(&server));

    let options = RequestOptions::new().header("Authorization", "Basic xyz").unwrap();
    client.send(Method::GET, "/get-projects", options).await.unwrap();

    let request = only_request(&server).await;
    assert!(request.headers.get("authorization").is_none());
}

/// **VALUE**: An error body that cannot be read still says why it is missing.
///
/// **WHY THIS MATTERS**: The server advertises more bytes than it sends, so
/// reading the body fails after the status line already arrived.
#[tokio::test]
async fn given_truncated_error_body_when_get_called_then_body_records_read_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let address = listener.local_addr().expect("listener address");
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let mut buffer = [0u8; 4096];
        let mut received = Vec::new();
        while !received.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = stream.read(&mut buffer).expect("read request");
            if read == 0 {
                break;
            }
            received.extend_from_slice(&buffer[..read]);
        }
        stream
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\npartial")
            .expect("write truncated response");
    });
    let config = EndpointConfig::new(format!("http://{address}"))
        .unwrap()
        .with_timeout(Duration::from_secs(5))
        .unwrap();
    let client = connected(config);

    let result = client.get("/change-requests", None).await;
    handle.join().expect("server thread");

    match result {
        Err(ApiError::HttpStatus { status, body, .. }) => {
            assert_eq!(status.0, 500);
            assert!(
                body.starts_with("<failed to read response body:"),
                "Unexpected body: {body}"
            );
        }
        other => panic!("Expected HttpStatus error, got {other:?}"),
    }
}
