//! HTTP vocabulary shared by the client and its test doubles.
//!
//! # Design
//! Requests and responses belong to the transport (`ureq`). This module only
//! names the verbs the client speaks and the single header it injects, and
//! re-exports the transport's response type so implementations of
//! `WebApiClient` agree on what they return.

use std::fmt;

/// Raw transport response: status, headers and an unread body stream.
pub type Response = ureq::http::Response<ureq::Body>;

/// Header set on every outgoing request.
pub const CONTENT_TYPE: &str = "Content-Type";

/// The only content type this client speaks.
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a payload.
    pub fn has_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
