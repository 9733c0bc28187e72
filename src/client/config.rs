//! Client configuration options.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::{Clock, SystemClock};

/// Configuration for the KillB client.
///
/// # Example
///
/// ```
/// use killb::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0")
///     .with_expiry_buffer(30);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Replaces the environment's base URL (test servers, proxies)
    pub base_url: Option<String>,
    /// Seconds before the recorded expiry at which a token already counts
    /// as expired. Zero means expiry is exact.
    pub expiry_buffer_secs: i64,
    /// On a 401, log in again once and replay the request
    pub retry_on_unauthorized: bool,
    /// Time source for expiry checks
    pub clock: Arc<dyn Clock>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("killb-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            base_url: None,
            expiry_buffer_secs: 0,
            retry_on_unauthorized: false,
            clock: Arc::new(SystemClock),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Send every call to `base_url` instead of the environment's host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Treat tokens as expired `secs` seconds early.
    pub fn with_expiry_buffer(mut self, secs: i64) -> Self {
        self.expiry_buffer_secs = secs;
        self
    }

    /// Enable or disable one re-login and replay after a 401.
    pub fn with_retry_on_unauthorized(mut self, enabled: bool) -> Self {
        self.retry_on_unauthorized = enabled;
        self
    }

    /// Use a custom time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ManualClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.expiry_buffer_secs, 0);
        assert!(!config.retry_on_unauthorized);
        assert!(config.base_url.is_none());
        assert!(config.user_agent.starts_with("killb-rs/"));
    }

    #[test]
    fn test_builder() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let config = ClientConfig::new()
            .with_base_url("http://localhost:8080")
            .with_expiry_buffer(15)
            .with_retry_on_unauthorized(true)
            .with_clock(ManualClock::new(start));

        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.expiry_buffer_secs, 15);
        assert!(config.retry_on_unauthorized);
        assert_eq!(config.clock.now(), start);
    }
}
