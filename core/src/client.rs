//! The `WebApiClient` capability trait and its default implementation.
//!
//! # Design
//! Consumers depend on `WebApiClient`, not on `Client`, so tests can swap in a
//! stub that returns canned responses. `Client` builds each request with a
//! `Content-Type: application/json` header and hands it to a `ureq::Agent`;
//! the response comes back untouched, whatever its status.
//!
//! `Client` carries no mutable state. Its only configuration (the timeout)
//! is fixed when the agent is built, which is what makes the shared
//! `DEFAULT_CLIENT` safe to use from any number of threads.

use std::sync::LazyLock;
use std::time::Duration;

use tracing::instrument;
use ureq::Agent;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpMethod, Response, APPLICATION_JSON, CONTENT_TYPE};

/// Operations a web API client provides.
///
/// `url` is passed to the transport as-is. `body` is sent as the raw request
/// payload. Any HTTP status is a successful response; errors mean no response
/// was obtained.
pub trait WebApiClient {
    fn get(&self, url: &str) -> Result<Response>;
    fn post(&self, url: &str, body: &[u8]) -> Result<Response>;
    fn put(&self, url: &str, body: &[u8]) -> Result<Response>;
    fn delete(&self, url: &str) -> Result<Response>;
}

impl<T: WebApiClient + ?Sized> WebApiClient for &T {
    fn get(&self, url: &str) -> Result<Response> {
        (**self).get(url)
    }

    fn post(&self, url: &str, body: &[u8]) -> Result<Response> {
        (**self).post(url, body)
    }

    fn put(&self, url: &str, body: &[u8]) -> Result<Response> {
        (**self).put(url, body)
    }

    fn delete(&self, url: &str) -> Result<Response> {
        (**self).delete(url)
    }
}

/// Blocking JSON client over a `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct Client {
    agent: Agent,
    timeout: Option<Duration>,
}

/// Shared client with no timeout, used by the free functions in this crate.
pub static DEFAULT_CLIENT: LazyLock<Client> = LazyLock::new(Client::default);

impl Client {
    /// Create a client whose requests fail once `timeout` elapses.
    /// `Duration::ZERO` means no timeout.
    pub fn new(timeout: Duration) -> Self {
        Self::with_timeout((!timeout.is_zero()).then_some(timeout))
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_timeout(config.timeout())
    }

    fn with_timeout(timeout: Option<Duration>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent, timeout }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    #[instrument(skip(self, body), fields(timeout = ?self.timeout))]
    fn dispatch(&self, method: HttpMethod, url: &str, body: &[u8]) -> Result<Response> {
        let result = match method {
            HttpMethod::Get => self.agent.get(url).header(CONTENT_TYPE, APPLICATION_JSON).call(),
            HttpMethod::Delete => self
                .agent
                .delete(url)
                .header(CONTENT_TYPE, APPLICATION_JSON)
                .call(),
            HttpMethod::Post => self
                .agent
                .post(url)
                .header(CONTENT_TYPE, APPLICATION_JSON)
                .send(body),
            HttpMethod::Put => self
                .agent
                .put(url)
                .header(CONTENT_TYPE, APPLICATION_JSON)
                .send(body),
        };

        match result {
            Ok(response) => {
                tracing::debug!(status = %response.status(), "response received");
                Ok(response)
            }
            Err(err) => {
                tracing::warn!("Http Response error: {}", err);
                Err(err.into())
            }
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::with_timeout(None)
    }
}

impl WebApiClient for Client {
    fn get(&self, url: &str) -> Result<Response> {
        self.dispatch(HttpMethod::Get, url, &[])
    }

    fn post(&self, url: &str, body: &[u8]) -> Result<Response> {
        self.dispatch(HttpMethod::Post, url, body)
    }

    fn put(&self, url: &str, body: &[u8]) -> Result<Response> {
        self.dispatch(HttpMethod::Put, url, body)
    }

    fn delete(&self, url: &str) -> Result<Response> {
        self.dispatch(HttpMethod::Delete, url, &[])
    }
}

/// `DEFAULT_CLIENT.get(url)`.
pub fn get(url: &str) -> Result<Response> {
    DEFAULT_CLIENT.get(url)
}

/// `DEFAULT_CLIENT.post(url, body)`.
pub fn post(url: &str, body: &[u8]) -> Result<Response> {
    DEFAULT_CLIENT.post(url, body)
}

/// `DEFAULT_CLIENT.put(url, body)`.
pub fn put(url: &str, body: &[u8]) -> Result<Response> {
    DEFAULT_CLIENT.put(url, body)
}

/// `DEFAULT_CLIENT.delete(url)`.
pub fn delete(url: &str) -> Result<Response> {
    DEFAULT_CLIENT.delete(url)
}
