//! Local HTTP responder the client is tested against.
//!
//! `/echo` reports what it received, `/slow` answers late, and
//! `/status/{code}` answers with an arbitrary status.

use std::time::Duration;

use axum::{
    body::Bytes,
    extract::Path,
    http::{header, HeaderMap, Method, StatusCode},
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// How long `/slow` waits before answering.
pub const SLOW_DELAY: Duration = Duration::from_millis(100);

/// Body returned by `/slow`.
pub const SLOW_BODY: &str = "Sorry I'm a bit slow...";

/// What `/echo` saw of the incoming request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoReply {
    pub method: String,
    /// Every `Content-Type` value, in the order received.
    pub content_type: Vec<String>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/echo", any(echo))
        .route("/slow", any(slow))
        .route("/status/{code}", any(status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(method: Method, headers: HeaderMap, body: Bytes) -> Json<EchoReply> {
    let content_type = headers
        .get_all(header::CONTENT_TYPE)
        .iter()
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .collect();
    tracing::debug!(%method, len = body.len(), "echo");
    Json(EchoReply {
        method: method.to_string(),
        content_type,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

async fn slow() -> &'static str {
    tokio::time::sleep(SLOW_DELAY).await;
    SLOW_BODY
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}
