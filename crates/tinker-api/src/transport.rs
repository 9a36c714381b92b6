// Shared transport configuration for building reqwest::Client instances.
//
// The backend answers plain HTTP on the local network, so the only knobs
// are the user agent and an optional overall request timeout.

use std::time::Duration;

const USER_AGENT: &str = concat!("tinker-space-command/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Overall request timeout. `None` waits for the backend indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: USER_AGENT.to_owned(),
        }
    }
}

impl TransportConfig {
    /// Set an overall request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.as_str());

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(|e| crate::error::Error::ClientBuild(e.to_string()))
    }
}
