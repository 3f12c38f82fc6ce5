//! Listener configuration

use crate::error::ListenerError;
use std::time::Duration;

/// Default pumpportal data feed endpoint
pub const DEFAULT_ENDPOINT: &str = "wss://pumpportal.fun/api/data";

/// Default length of one listen cycle
pub const DEFAULT_LISTEN_DURATION: Duration = Duration::from_secs(15);

/// Default connect timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a [`FeedListener`](crate::listener::FeedListener)
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// WebSocket endpoint of the feed
    pub endpoint: String,
    /// How long the listener stays attached before disconnecting
    pub duration: Duration,
    /// Hard bound on connection establishment
    pub connect_timeout: Duration,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            duration: DEFAULT_LISTEN_DURATION,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl ListenerConfig {
    pub fn validate(&self) -> Result<(), ListenerError> {
        if self.endpoint.is_empty() {
            return Err(ListenerError::Configuration(
                "endpoint cannot be empty".to_string(),
            ));
        }
        if self.duration.is_zero() {
            return Err(ListenerError::Configuration(
                "listen duration must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder pattern for listener configuration
pub struct ListenerConfigBuilder {
    config: ListenerConfig,
}

impl ListenerConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ListenerConfig::default(),
        }
    }

    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.config.endpoint = endpoint.to_string();
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.config.duration = duration;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn build(self) -> ListenerConfig {
        self.config
    }
}

impl Default for ListenerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
