//! Client configuration.
//!
//! The library never reads the environment or the filesystem. Hosts that keep
//! client settings in a config file deserialize a `ClientConfig` from it and
//! hand it to `Client::from_config`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for a `Client`. A `timeout_ms` of zero means no timeout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub timeout_ms: u64,
}

impl ClientConfig {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// The bound on a single exchange, or `None` to wait indefinitely.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}
