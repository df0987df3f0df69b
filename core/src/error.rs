//! Error type for the client.
//!
//! # Design
//! Every failure travels through one `HttpcError` value, but the variant says
//! which kind of failure it was, so callers can tell a timeout from a refused
//! connection without matching on message text. The underlying `ureq::Error`
//! is kept as the `source`. The `Timeout` message still reads
//! "request canceled" for callers that only look at text.

use std::io;

use thiserror::Error;

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, HttpcError>;

/// Errors returned by `WebApiClient` operations.
#[derive(Debug, Error)]
pub enum HttpcError {
    /// The request could not be built (malformed URL, bad header). Nothing
    /// was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(#[source] ureq::Error),

    /// The configured timeout elapsed before the exchange completed.
    #[error("request canceled (client timeout exceeded): {0}")]
    Timeout(#[source] ureq::Error),

    /// The host could not be resolved or the connection was refused or dropped.
    #[error("connection failed: {0}")]
    ConnectionFailed(#[source] ureq::Error),

    /// Any other failure raised while dispatching.
    #[error("transport error: {0}")]
    Transport(#[source] ureq::Error),
}

impl HttpcError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpcError::Timeout(_))
    }

    pub fn is_connection_failed(&self) -> bool {
        matches!(self, HttpcError::ConnectionFailed(_))
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(self, HttpcError::InvalidRequest(_))
    }

    /// The transport error this value wraps.
    pub fn transport_error(&self) -> &ureq::Error {
        match self {
            HttpcError::InvalidRequest(e)
            | HttpcError::Timeout(e)
            | HttpcError::ConnectionFailed(e)
            | HttpcError::Transport(e) => e,
        }
    }
}

impl From<ureq::Error> for HttpcError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Timeout(_) => HttpcError::Timeout(err),
            ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
                HttpcError::ConnectionFailed(err)
            }
            ureq::Error::BadUri(_) | ureq::Error::Http(_) => HttpcError::InvalidRequest(err),
            ureq::Error::Io(ref io_err) => match io_err.kind() {
                io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => HttpcError::Timeout(err),
                io::ErrorKind::ConnectionRefused
                | io::ErrorKind::ConnectionReset
                | io::ErrorKind::ConnectionAborted
                | io::ErrorKind::NotConnected
                | io::ErrorKind::AddrNotAvailable => HttpcError::ConnectionFailed(err),
                _ => HttpcError::Transport(err),
            },
            _ => HttpcError::Transport(err),
        }
    }
}
