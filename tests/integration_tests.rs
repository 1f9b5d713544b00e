//! Integration tests for the request pipeline using wiremock.

use http::Method;
use oura_client::{CancelCause, Client, Context, Error, LIBRARY_USER_AGENT};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Foo {
    a: String,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn setup() -> (Client, MockServer) {
    init_tracing();
    let mock_server = MockServer::start().await;
    let client = Client::builder()
        .base_url(format!("{}/", mock_server.uri()))
        .unwrap()
        .build()
        .unwrap();
    (client, mock_server)
}

async fn get_foo(
    client: &Client,
    ctx: &Context,
) -> oura_client::Result<oura_client::Response<Option<Foo>>> {
    let request = client.new_request::<()>(Method::GET, ".", None).unwrap();
    client.execute(ctx, request).await
}

#[tokio::test]
async fn test_successful_get_request() {
    let (client, mock_server) = setup().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"a":"a"}"#))
        .mount(&mock_server)
        .await;

    let response = get_foo(&client, &Context::background()).await.unwrap();

    assert_eq!(response.data, Some(Foo { a: "a".to_string() }));
    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.raw_body, r#"{"a":"a"}"#);
}

#[tokio::test]
async fn test_standard_headers_are_sent() {
    let (client, mock_server) = setup().await;

    Mock::given(method("GET"))
        .and(header("accept", "application/json"))
        .and(header("user-agent", LIBRARY_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"a":"a"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    get_foo(&client, &Context::background()).await.unwrap();
}

#[tokio::test]
async fn test_json_body_is_sent() {
    let (client, mock_server) = setup().await;

    Mock::given(method("POST"))
        .and(path("/foo"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"a":"<tag> & more"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"a":"created"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = Foo {
        a: "<tag> & more".to_string(),
    };
    let request = client.new_request(Method::POST, "foo", Some(&body)).unwrap();
    let response = client.execute::<Foo>(&Context::background(), request).await.unwrap();

    assert_eq!(response.status.as_u16(), 201);
    assert_eq!(response.data.unwrap().a, "created");
}

#[tokio::test]
async fn test_access_token_is_sent_as_bearer() {
    let mock_server = MockServer::start().await;
    let client = Client::builder()
        .base_url(format!("{}/", mock_server.uri()))
        .unwrap()
        .access_token("s3cr3t")
        .user_agent("dashboard/0.3")
        .build()
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/userinfo"))
        .and(header("authorization", "Bearer s3cr3t"))
        .and(header("user-agent", format!("dashboard/0.3 {}", LIBRARY_USER_AGENT).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"age": 31}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client.v1().user_info(&Context::background()).await.unwrap();
    assert_eq!(response.data.unwrap().age, Some(31));
}

#[tokio::test]
async fn test_injected_http_client_is_used() {
    let mock_server = MockServer::start().await;

    let mut headers = http::HeaderMap::new();
    headers.insert("authorization", http::HeaderValue::from_static("Bearer injected"));
    let http_client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap();

    let client = Client::builder()
        .base_url(format!("{}/", mock_server.uri()))
        .unwrap()
        .http_client(http_client)
        .access_token("ignored")
        .build()
        .unwrap();

    Mock::given(header("authorization", "Bearer injected"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"a":"a"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    get_foo(&client, &Context::background()).await.unwrap();
}

#[tokio::test]
async fn test_http_error_without_body() {
    let (client, mock_server) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = get_foo(&client, &Context::background()).await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert!(matches!(err, Error::Decode { .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_empty_payload_is_not_an_error() {
    let (client, mock_server) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let response = get_foo(&client, &Context::background()).await.unwrap();

    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.data, None);
}

#[tokio::test]
async fn test_html_payload_is_a_decode_error() {
    let (client, mock_server) = setup().await;

    let html = r#"<!doctype html>
<html lang="en-GB">
<head>
  <meta http-equiv="Content-Type" content="text/html; charset=utf-8">
  <title>Default Page Title</title>
</head>
<body></body>
</html>"#;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&mock_server)
        .await;

    match get_foo(&client, &Context::background()).await {
        Err(Error::Decode {
            status,
            raw_response,
            ..
        }) => {
            assert_eq!(status.as_u16(), 200);
            assert_eq!(raw_response, html);
        }
        other => panic!("Expected Decode, got {:?}", other),
    }
}

#[tokio::test]
async fn test_cancelled_context_sends_nothing() {
    let (client, mock_server) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"a":"a"}"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let ctx = Context::background();
    ctx.cancel();

    match get_foo(&client, &ctx).await {
        Err(Error::Cancelled(cause)) => assert_eq!(cause, CancelCause::Cancelled),
        other => panic!("Expected Cancelled, got {:?}", other),
    }
}

#[tokio::test]
async fn test_deadline_expires_during_request() {
    let (client, mock_server) = setup().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"a":"a"}"#)
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let ctx = Context::with_timeout(Duration::from_millis(50));
    let err = get_foo(&client, &ctx).await.unwrap_err();

    match err {
        Error::Cancelled(cause) => assert_eq!(cause, CancelCause::DeadlineExceeded),
        other => panic!("Expected Cancelled, got {:?}", other),
    }
}

#[tokio::test]
async fn test_forbidden_is_a_permanent_auth_error() {
    let (client, mock_server) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let err = get_foo(&client, &Context::background()).await.unwrap_err();

    assert!(matches!(err, Error::Auth { .. }), "got {:?}", err);
    assert!(!err.is_temporary());
    assert_eq!(err.status().map(|s| s.as_u16()), Some(403));
}

#[tokio::test]
async fn test_unauthorized_ignores_structured_body() {
    let (client, mock_server) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string(
            r#"{"status": 401, "title": "Unauthorized", "detail": "Token expired"}"#,
        ))
        .mount(&mock_server)
        .await;

    match get_foo(&client, &Context::background()).await {
        Err(Error::Auth { status, message }) => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(message, "Unauthorized");
        }
        other => panic!("Expected Auth, got {:?}", other),
    }
}

#[tokio::test]
async fn test_network_failure() {
    // Nothing listens on port 1.
    let client = Client::builder()
        .base_url("http://127.0.0.1:1/")
        .unwrap()
        .build()
        .unwrap();
    let err = get_foo(&client, &Context::background()).await.unwrap_err();

    assert!(matches!(err, Error::Network(_)), "got {:?}", err);
    assert!(err.is_temporary());
}

#[tokio::test]
async fn test_response_metadata() {
    let (client, mock_server) = setup().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"a":"Test"}"#)
                .insert_header("x-custom-header", "custom-value"),
        )
        .mount(&mock_server)
        .await;

    let response = get_foo(&client, &Context::background()).await.unwrap();

    assert_eq!(response.status.as_u16(), 200);
    assert!(response.raw_body.contains("Test"));
    assert_eq!(response.header("x-custom-header"), Some("custom-value"));
    let _ = response.latency;
}

#[tokio::test]
async fn test_client_is_shareable_across_tasks() {
    let (client, mock_server) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"a":"a"}"#))
        .expect(8)
        .mount(&mock_server)
        .await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { get_foo(&client, &Context::background()).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
}
