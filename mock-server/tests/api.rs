use std::time::Instant;

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, EchoReply, SLOW_BODY, SLOW_DELAY};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- echo ---

#[tokio::test]
async fn echo_reports_method_header_and_body() {
    let resp = app()
        .oneshot(json_request("POST", "/echo", r#"{"title":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let reply: EchoReply = body_json(resp).await;
    assert_eq!(reply.method, "POST");
    assert_eq!(reply.content_type, vec!["application/json".to_string()]);
    assert_eq!(reply.body, r#"{"title":"Buy milk"}"#);
}

#[tokio::test]
async fn echo_accepts_every_verb() {
    for method in ["GET", "POST", "PUT", "DELETE"] {
        let resp = app().oneshot(json_request(method, "/echo", "")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let reply: EchoReply = body_json(resp).await;
        assert_eq!(reply.method, method);
        assert!(reply.body.is_empty());
    }
}

#[tokio::test]
async fn echo_without_content_type_reports_none() {
    let resp = app()
        .oneshot(Request::builder().uri("/echo").body(String::new()).unwrap())
        .await
        .unwrap();

    let reply: EchoReply = body_json(resp).await;
    assert_eq!(reply.method, "GET");
    assert!(reply.content_type.is_empty());
}

#[tokio::test]
async fn echo_reports_repeated_content_type() {
    let request = Request::builder()
        .uri("/echo")
        .header(http::header::CONTENT_TYPE, "application/json")
        .header(http::header::CONTENT_TYPE, "text/plain")
        .body(String::new())
        .unwrap();
    let reply: EchoReply = body_json(app().oneshot(request).await.unwrap()).await;
    assert_eq!(reply.content_type, vec!["application/json", "text/plain"]);
}

// --- slow ---

#[tokio::test]
async fn slow_answers_after_delay() {
    let started = Instant::now();
    let resp = app()
        .oneshot(Request::builder().uri("/slow").body(String::new()).unwrap())
        .await
        .unwrap();

    assert!(started.elapsed() >= SLOW_DELAY);
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, SLOW_BODY.as_bytes());
}

// --- status ---

#[tokio::test]
async fn status_returns_requested_code() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/status/404")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn status_with_non_numeric_code_returns_400() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/status/teapot")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app()
        .oneshot(Request::builder().uri("/nope").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
