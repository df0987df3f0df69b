//! Minimal blocking HTTP client behind a swappable trait.
//!
//! # Overview
//! `WebApiClient` names four operations (GET, POST, PUT, DELETE). `Client`
//! implements them over `ureq`, adding `Content-Type: application/json` to
//! every request and returning the raw response. Free functions forward to a
//! shared `DEFAULT_CLIENT` for callers that need no injection.
//!
//! # Design
//! - Code that talks to a web API takes `impl WebApiClient`, so tests can
//!   pass a stub instead of hitting the network.
//! - No retries, no body parsing, no header customization beyond the fixed
//!   content type.
//! - A timeout, when configured, bounds the whole exchange; zero means wait
//!   forever.
//! - Failures are tagged (`HttpcError::Timeout`, `ConnectionFailed`, ...).

pub mod client;
pub mod config;
pub mod error;
pub mod http;

pub use client::{delete, get, post, put, Client, WebApiClient, DEFAULT_CLIENT};
pub use config::ClientConfig;
pub use error::{HttpcError, Result};
pub use http::{HttpMethod, Response, APPLICATION_JSON, CONTENT_TYPE};
