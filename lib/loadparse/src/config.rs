//! Transport configuration.
//!
//! These settings belong to the [`HyperClient`](crate::HyperClient) transport.
//! The fetch layer has no timeout or retry knob of its own.

use std::time::Duration;

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("loadparse/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Time allowed for the whole exchange, body included.
    pub timeout: Duration,
    /// Time allowed to establish the TCP connection.
    pub connect_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_idle_per_host: usize,
    /// Idle connection timeout.
    pub pool_idle_timeout: Duration,
    /// `User-Agent` sent when the request does not set one. `None` sends no header.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    pool_idle_per_host: Option<usize>,
    pool_idle_timeout: Option<Duration>,
    user_agent: Option<String>,
    without_user_agent: bool,
}

impl ClientConfigBuilder {
    /// Set the transport timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub const fn pool_idle_per_host(mut self, count: usize) -> Self {
        self.pool_idle_per_host = Some(count);
        self
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    /// Set the default `User-Agent`.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self.without_user_agent = false;
        self
    }

    /// Do not send a default `User-Agent`.
    #[must_use]
    pub fn without_user_agent(mut self) -> Self {
        self.user_agent = None;
        self.without_user_agent = true;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            timeout: self.timeout.unwrap_or(defaults.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            pool_idle_per_host: self
                .pool_idle_per_host
                .unwrap_or(defaults.pool_idle_per_host),
            pool_idle_timeout: self.pool_idle_timeout.unwrap_or(defaults.pool_idle_timeout),
            user_agent: if self.without_user_agent {
                None
            } else {
                self.user_agent.or(defaults.user_agent)
            },
        }
    }
}
